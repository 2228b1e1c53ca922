use std::borrow::Cow;

use regex::Captures;

use crate::utils::{BARE_HREF_PATTERN, SNAPSHOT_INSTALLER_PATTERN};

/// Scan state carried from one line to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteState {
    /// Tag of the most recent 64-bit installer link seen so far
    pub tag: Option<String>,
}

/// What happened to a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Unchanged(&'a str),
    Rewritten(String),
    /// Had bare links but no tag was known yet; left as is
    Skipped(&'a str),
}

impl LineOutcome<'_> {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(line) | Self::Skipped(line) => line,
            Self::Rewritten(line) => line,
        }
    }
}

/// Result of rewriting a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefRewrite {
    pub content: String,
    pub rewritten_lines: usize,
    /// 1-based numbers of lines left untouched for lack of a tag
    pub skipped_lines: Vec<usize>,
}

impl HrefRewrite {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.rewritten_lines > 0
    }
}

/// Turns bare file name links into release download URLs
#[derive(Debug, Clone)]
pub struct HrefRewriter {
    download_url_base: String,
    stylesheet: String,
}

impl HrefRewriter {
    pub fn new(download_url_base: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            download_url_base: download_url_base.into().trim_end_matches('/').to_string(),
            stylesheet: stylesheet.into(),
        }
    }

    fn is_release_asset(&self, target: &str) -> bool {
        !target.starts_with(self.stylesheet.as_str()) && !target.starts_with("mailto:")
    }

    /// Rewrites one line, returning the state for the next line.
    ///
    /// Links to the stylesheet and `mailto:` links never count as release
    /// assets: they neither pick the tag nor get rewritten, even on a line
    /// whose other bare links are.
    pub fn rewrite_line<'a>(
        &self,
        state: RewriteState,
        line: &'a str,
    ) -> (RewriteState, LineOutcome<'a>) {
        let Some(first) = BARE_HREF_PATTERN
            .captures_iter(line)
            .filter_map(|captures| captures.get(1))
            .map(|target| target.as_str())
            .find(|target| self.is_release_asset(target))
        else {
            return (state, LineOutcome::Unchanged(line));
        };

        let state = match SNAPSHOT_INSTALLER_PATTERN.captures(first) {
            Some(captures) => RewriteState {
                tag: captures.get(1).map(|tag| tag.as_str().to_string()),
            },
            None => state,
        };

        let Some(tag) = state.tag.clone() else {
            return (state, LineOutcome::Skipped(line));
        };

        let rewritten = BARE_HREF_PATTERN.replace_all(line, |captures: &Captures<'_>| {
            let target = &captures[1];
            if self.is_release_asset(target) {
                format!("href=\"{}/{tag}/{target}\"", self.download_url_base)
            } else {
                captures[0].to_string()
            }
        });

        let outcome = match rewritten {
            Cow::Borrowed(line) => LineOutcome::Unchanged(line),
            Cow::Owned(line) => LineOutcome::Rewritten(line),
        };
        (state, outcome)
    }

    /// Rewrites every line of `content`, threading the tag from line to line
    pub fn rewrite(&self, content: &str) -> HrefRewrite {
        let mut state = RewriteState::default();
        let mut lines = Vec::new();
        let mut rewritten_lines = 0;
        let mut skipped_lines = Vec::new();

        for (line_num, line) in content.split('\n').enumerate() {
            let (next, outcome) = self.rewrite_line(state, line);
            state = next;
            match &outcome {
                LineOutcome::Rewritten(_) => rewritten_lines += 1,
                LineOutcome::Skipped(_) => skipped_lines.push(line_num + 1),
                LineOutcome::Unchanged(_) => {}
            }
            lines.push(outcome);
        }

        HrefRewrite {
            content: lines
                .iter()
                .map(LineOutcome::text)
                .collect::<Vec<_>>()
                .join("\n"),
            rewritten_lines,
            skipped_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/git-for-windows/git-snapshots/releases/download";

    fn rewriter() -> HrefRewriter {
        HrefRewriter::new(BASE, "GitForWindows.css")
    }

    #[test]
    fn test_installer_link_sets_tag_for_its_line() {
        let line = r#"<li><a href="Git-prerelease-2.40.0.windows.1.1-64-bit.exe">x64</a> and <a href="Git-prerelease-2.40.0.windows.1.1-32-bit.exe">x86</a></li>"#;
        let (state, outcome) = rewriter().rewrite_line(RewriteState::default(), line);

        assert_eq!(state.tag.as_deref(), Some("prerelease-2.40.0.windows.1.1"));
        assert_eq!(
            outcome.text(),
            format!(
                "<li><a href=\"{BASE}/prerelease-2.40.0.windows.1.1/Git-prerelease-2.40.0.windows.1.1-64-bit.exe\">x64</a> and \
                 <a href=\"{BASE}/prerelease-2.40.0.windows.1.1/Git-prerelease-2.40.0.windows.1.1-32-bit.exe\">x86</a></li>"
            )
        );
    }

    #[test]
    fn test_tag_carries_over_to_later_lines() {
        let content = "<a href=\"Git-v1-64-bit.exe\">a</a>\n<a href=\"MinGit-v1-64-bit.zip\">b</a>";
        let result = rewriter().rewrite(content);
        assert_eq!(
            result.content,
            format!(
                "<a href=\"{BASE}/v1/Git-v1-64-bit.exe\">a</a>\n<a href=\"{BASE}/v1/MinGit-v1-64-bit.zip\">b</a>"
            )
        );
        assert_eq!(result.rewritten_lines, 2);
        assert!(result.skipped_lines.is_empty());
    }

    #[test]
    fn test_later_installer_replaces_tag() {
        let content = "<a href=\"Git-v1-64-bit.exe\">a</a>\n<a href=\"Git-v2-64-bit.exe\">b</a>\n<a href=\"x.zip\">c</a>";
        let result = rewriter().rewrite(content);
        assert!(result.content.ends_with(&format!("<a href=\"{BASE}/v2/x.zip\">c</a>")));
    }

    #[test]
    fn test_stylesheet_mailto_and_urls_are_left_alone() {
        let content = "<link rel=\"stylesheet\" href=\"GitForWindows.css\">\n\
                       <a href=\"mailto:someone@example.com\">mail</a>\n\
                       <a href=\"https://gitforwindows.org/\">home</a>\n\
                       <a href=\"#2023-04-04T00:00:00.000Z\">anchor</a>";
        let result = rewriter().rewrite(content);
        assert_eq!(result.content, content);
        assert!(!result.is_changed());
        // the anchor is bare but no tag is known yet
        assert_eq!(result.skipped_lines, vec![4]);
    }

    #[test]
    fn test_stylesheet_on_rewritten_line_is_kept() {
        let line = r#"<a href="GitForWindows.css">css</a><a href="Git-t-64-bit.exe">i</a>"#;
        let (_, outcome) = rewriter().rewrite_line(RewriteState::default(), line);
        assert_eq!(
            outcome.text(),
            format!("<a href=\"GitForWindows.css\">css</a><a href=\"{BASE}/t/Git-t-64-bit.exe\">i</a>")
        );
    }

    #[test]
    fn test_no_tag_yet_skips_line() {
        let content = "<p>\n<a href=\"MinGit-v1-64-bit.zip\">b</a>\n</p>";
        let result = rewriter().rewrite(content);
        assert_eq!(result.content, content);
        assert_eq!(result.skipped_lines, vec![2]);
        assert_eq!(result.rewritten_lines, 0);
    }

    #[test]
    fn test_document_without_bare_links_is_byte_identical() {
        let content = "<html>\n\n<body>\r\n<a href=\"https://example.com/x.exe\">x</a>\n</body>\n</html>\n";
        let result = rewriter().rewrite(content);
        assert_eq!(result.content, content);
        assert!(result.skipped_lines.is_empty());
    }
}
