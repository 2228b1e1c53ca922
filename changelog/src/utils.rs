use once_cell::sync::Lazy;
use regex::Regex;

/// A section header; `.` stops at line ends, so a header never spans lines
pub static SECTION_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h2 .+</h2>").expect("Failed to compile section header regex"));

pub static HEADER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^<h2 id="([^"]+)"#).expect("Failed to compile header id regex"));

/// An href whose target is a plain file name (no path separator)
pub static BARE_HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="([^"/]+)""#).expect("Failed to compile bare href regex"));

/// The 64-bit installer of a snapshot, which carries the snapshot's tag name
pub static SNAPSHOT_INSTALLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Git-(.*)-64-bit\.exe$").expect("Failed to compile snapshot installer regex")
});

/// Whatever closes the page after the last section: trailing whitespace and
/// an optional `</body>`/`</html>` tail
pub static DOCUMENT_TAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\s*(?:</(?:body|html)>.*)?\z").expect("Failed to compile document tail regex")
});
