use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ChangelogError;
use crate::parser::Document;

/// Where a new section goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// Always the first section, whatever its date
    #[default]
    AppendToTop,
    /// Keeps sections in descending date order; used when backfilling
    InsertByDate,
}

impl FromStr for InsertMode {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append-to-top" => Ok(Self::AppendToTop),
            "insert-by-date" => Ok(Self::InsertByDate),
            other => Err(ChangelogError::format(format!("Unhandled mode: '{other}'"))),
        }
    }
}

impl Display for InsertMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppendToTop => f.write_str("append-to-top"),
            Self::InsertByDate => f.write_str("insert-by-date"),
        }
    }
}

/// Entry index at which `section` is inserted.
///
/// By date, the scan advances past every header that the rendered section
/// sorts before. Headers start with their ISO-8601 id, so byte order is
/// date order.
pub fn find_insert_position(document: &Document, section: &str, mode: InsertMode) -> usize {
    match mode {
        InsertMode::AppendToTop => 0,
        InsertMode::InsertByDate => document
            .entries()
            .iter()
            .position(|entry| section >= entry.header.raw.as_str())
            .unwrap_or(document.entries().len()),
    }
}
