use thiserror::Error;

/// Reasons a tag string fails to parse into a [`crate::domain::Version`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    /// The tag does not have the `v?MAJOR.MINOR.PATCH[-QUALIFIER]` shape
    #[error("Version '{tag}' does not match the required format 'v[0-9]+.[0-9]+.[0-9]+[-QUALIFIER]'")]
    MalformedTag { tag: String },

    /// The shape is right but the qualifier is not one of the allowed ones
    #[error(
        "Invalid qualifier '{qualifier}' in tag '{tag}': expected one of SNAPSHOT, ALPHA, BETA, RC1-RC99, RELEASE, HF1-HF99"
    )]
    UnknownQualifier { tag: String, qualifier: String },
}

impl TagParseError {
    pub fn malformed(tag: impl Into<String>) -> Self {
        TagParseError::MalformedTag { tag: tag.into() }
    }

    pub fn unknown_qualifier(tag: impl Into<String>, qualifier: impl Into<String>) -> Self {
        TagParseError::UnknownQualifier {
            tag: tag.into(),
            qualifier: qualifier.into(),
        }
    }
}

/// Unified error type for version-tag-check operations
#[derive(Error, Debug)]
pub enum VersionTagError {
    #[error("Tag parsing error: {0}")]
    Parse(#[from] TagParseError),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),
}

/// Convenience type alias for Results in version-tag-check
pub type Result<T> = std::result::Result<T, VersionTagError>;

impl VersionTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionTagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VersionTagError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_tag() {
        let err = TagParseError::malformed("v1.2");
        assert!(err.to_string().starts_with("Version 'v1.2' does not match"));
    }

    #[test]
    fn test_unknown_qualifier_display_lists_allowed() {
        let err = TagParseError::unknown_qualifier("v1.0.0-RC", "RC");
        let msg = err.to_string();
        assert!(msg.contains("Invalid qualifier 'RC'"));
        assert!(msg.contains("RC1-RC99"));
        assert!(msg.contains("HF1-HF99"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: VersionTagError = TagParseError::malformed("x").into();
        assert!(err.to_string().starts_with("Tag parsing error"));
        assert!(matches!(err, VersionTagError::Parse(_)));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionTagError::config("x"), "Configuration error"),
            (VersionTagError::tag("x"), "Tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
