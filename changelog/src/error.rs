use thiserror::Error;

/// Errors that can occur when working with the snapshots changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse URL: {url} (fileName: {file_name})")]
    Parse { url: String, file_name: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Format(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    pub fn parse(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::Parse {
            url: url.into(),
            file_name: file_name.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Whether this is a classification failure, looking through context wrappers
    #[must_use]
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Parse { .. } => true,
            Self::WithContext(_, inner) => inner.is_parse(),
            _ => false,
        }
    }

    /// Whether this is a structural (format) failure, looking through context wrappers
    #[must_use]
    pub fn is_format(&self) -> bool {
        match self {
            Self::Format(_) => true,
            Self::WithContext(_, inner) => inner.is_format(),
            _ => false,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::Parse { url, file_name } => {
                format!("Cannot parse URL: {url} (fileName: {file_name})")
            }
            Self::Validation(msg) => msg.clone(),
            Self::Format(msg) => msg.clone(),
            Self::RegexError(e) => format!("Regular expression error: {e}"),
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_url_and_file() {
        let err = ChangelogError::parse("https://example.com/a/foo.txt", "foo.txt");
        assert_eq!(
            err.user_message(),
            "Cannot parse URL: https://example.com/a/foo.txt (fileName: foo.txt)"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_context_wrapping_keeps_kind() {
        let err = ChangelogError::format("'index.html' is not in the expected format")
            .with_context("Reading changelog");
        assert!(err.is_format());
        assert_eq!(
            err.user_message(),
            "Reading changelog: 'index.html' is not in the expected format"
        );

        let err = ChangelogError::validation("Need a date!").with_context("index.html");
        assert!(!err.is_format());
        assert!(!err.is_parse());
        assert_eq!(err.user_message(), "index.html: Need a date!");
    }
}
