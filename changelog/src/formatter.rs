use std::collections::HashSet;

use crate::types::*;

// --- Traits ---

pub trait SectionFormatter: Send + Sync {
    fn format(&self, id: &str, entry: &ReleaseEntry) -> String;
}

// Section Formatter (HTML)
#[derive(Debug, Clone)]
pub struct HtmlSectionFormatter {
    pub commit_url_base: String,
}

impl HtmlSectionFormatter {
    pub fn new(commit_url_base: impl Into<String>) -> Self {
        Self {
            commit_url_base: commit_url_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn format_header(&self, id: &str, entry: &ReleaseEntry) -> String {
        let commit = &entry.commit;
        format!(
            "<h2 id=\"{id}\"><a class=\"anchor\" href=\"#{id}\">&#128279;</a>{date}<br />(commit <a href=\"{base}/{commit}\">{commit}</a>)</h2>\n",
            date = entry.date.display(),
            base = self.commit_url_base,
        )
    }
}

impl SectionFormatter for HtmlSectionFormatter {
    fn format(&self, id: &str, entry: &ReleaseEntry) -> String {
        let mut formatted = String::with_capacity(1024);
        formatted.push_str(&self.format_header(id, entry));
        formatted.push('\n');
        formatted.push_str("<ul>\n");

        for kind in ArtifactKind::DISPLAY_ORDER {
            let urls = entry.artifacts.get(kind);
            if urls.is_empty() {
                continue;
            }
            formatted.push_str("<li>");
            formatted.push_str(kind.label());
            formatted.push_str(": ");
            formatted.push_str(&list_urls(urls));
            formatted.push_str(".</li>\n");
        }

        formatted.push_str("</ul>");
        formatted
    }
}

/// Links ordered by architecture rank, highest first, joined as
/// "A, B and C"
pub fn list_urls(urls: &[ClassifiedUrl]) -> String {
    let mut sorted: Vec<&ClassifiedUrl> = urls.iter().collect();
    sorted.sort_by(|a, b| b.architecture.rank().cmp(&a.architecture.rank()));

    let last = sorted.len().saturating_sub(1);
    sorted
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let separator = match i {
                0 => "",
                i if i == last => " and ",
                _ => ", ",
            };
            format!(
                "{separator}<a href=\"{}\">{}</a>",
                url.url,
                url.architecture.label()
            )
        })
        .collect()
}

/// `stamp` itself when unused, otherwise `stamp-N` for the smallest N >= 2
/// not present in `existing`
pub fn unique_id(stamp: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(stamp) {
        return stamp.to_string();
    }
    (2_usize..)
        .map(|i| format!("{stamp}-{i}"))
        .find(|candidate| !existing.contains(candidate))
        .unwrap_or_else(|| format!("{stamp}-{}", existing.len() + 2))
}
