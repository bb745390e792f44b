//! Fixture loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing or validating fixture collections.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to parse {domain} fixtures: {source}")]
    Parse {
        domain: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {domain} record '{id}': {reason}")]
    Invalid {
        domain: &'static str,
        id: String,
        reason: String,
    },
}

impl FixtureError {
    pub fn invalid(domain: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            domain,
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Fixture domain the error belongs to, when known.
    pub fn domain(&self) -> Option<&'static str> {
        match self {
            Self::Parse { domain, .. } | Self::Invalid { domain, .. } => Some(domain),
            Self::Io { .. } => None,
        }
    }
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_record() {
        let err = FixtureError::invalid("photos", "p9", "duplicate id");
        assert_eq!(err.to_string(), "Invalid photos record 'p9': duplicate id");
        assert_eq!(err.domain(), Some("photos"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FixtureError::Parse {
            domain: "guides",
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse guides fixtures"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
