use std::collections::HashSet;

use crate::{error::ChangelogError, types::Result, utils::*};

/// A section header line, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: Option<String>,
    pub raw: String,
}

impl Header {
    fn new(raw: &str) -> Self {
        let id = HEADER_ID_PATTERN
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string());
        Self {
            id,
            raw: raw.to_string(),
        }
    }
}

/// A header and the text that follows it up to the next header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub header: Header,
    pub body: String,
}

/// The changelog document as text before the first header followed by
/// header/body pairs. Reassembling yields the parsed text unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    preamble: String,
    entries: Vec<Entry>,
}

impl Document {
    /// Splits the document on section headers
    ///
    /// # Errors
    /// Returns a format error when the text contains no section header
    pub fn parse(content: &str) -> Result<Self> {
        let (preamble, entries) = split_entries(content);
        if entries.is_empty() {
            return Err(ChangelogError::format(
                "the changelog is not in the expected format (no section header found)",
            ));
        }
        Ok(Self { preamble, entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Ids of all existing section headers
    #[must_use]
    pub fn ids(&self) -> HashSet<String> {
        self.entries
            .iter()
            .filter_map(|entry| entry.header.id.clone())
            .collect()
    }

    /// Inserts a rendered section so that it becomes entry `index`.
    ///
    /// The section is separated from whatever header follows it by a blank line.
    /// Past the last header, the section goes in front of the page tail
    /// (`</body>`, `</html>`), which moves to the end of the new section.
    ///
    /// # Errors
    /// Returns a format error when `index` is out of range or the section has
    /// no header of its own
    pub fn insert(&mut self, index: usize, section: &str) -> Result<()> {
        if index > self.entries.len() {
            return Err(ChangelogError::format(format!(
                "insert position {index} is past the last of {} sections",
                self.entries.len()
            )));
        }

        let at_end = index == self.entries.len();
        let separator = if at_end { "" } else { "\n\n" };
        let (lead, mut entries) = split_entries(&format!("{section}{separator}"));
        if !lead.is_empty() || entries.len() != 1 {
            return Err(ChangelogError::format(
                "a rendered section must consist of exactly one header and its body",
            ));
        }
        let Some(mut entry) = entries.pop() else {
            return Ok(());
        };

        if at_end {
            if let Some(last) = self.entries.last_mut() {
                let tail_start = DOCUMENT_TAIL_PATTERN
                    .find(&last.body)
                    .map_or(last.body.len(), |tail| tail.start());
                entry.body.push_str(&last.body[tail_start..]);
                last.body.truncate(tail_start);
                last.body.push_str("\n\n");
            }
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Reassembles the document text
    #[must_use]
    pub fn render(&self) -> String {
        let capacity = self.preamble.len()
            + self
                .entries
                .iter()
                .map(|e| e.header.raw.len() + e.body.len())
                .sum::<usize>();
        let mut content = String::with_capacity(capacity);
        content.push_str(&self.preamble);
        for entry in &self.entries {
            content.push_str(&entry.header.raw);
            content.push_str(&entry.body);
        }
        content
    }
}

fn split_entries(content: &str) -> (String, Vec<Entry>) {
    let mut headers = SECTION_HEADER_PATTERN.find_iter(content).peekable();
    let preamble_end = headers.peek().map_or(content.len(), |m| m.start());
    let preamble = content[..preamble_end].to_string();

    let mut entries = Vec::new();
    while let Some(header) = headers.next() {
        let body_end = headers.peek().map_or(content.len(), |next| next.start());
        entries.push(Entry {
            header: Header::new(header.as_str()),
            body: content[header.end()..body_end].to_string(),
        });
    }

    (preamble, entries)
}
