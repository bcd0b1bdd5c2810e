//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input, policy, and rendering failures.
#[derive(Debug)]
pub enum DashboardError {
    /// An error from the underlying Yahoo Finance client.
    Api(stockdash_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The strict metadata policy found a field absent.
    MissingField(&'static str),
    /// The page template failed to compile or render.
    Template(tera::Error),
    /// JSON serialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingField(name) => write!(f, "Missing required field: {}", name),
            Self::Template(e) => write!(f, "Template error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Template(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<stockdash_api::Error> for DashboardError {
    fn from(e: stockdash_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<tera::Error> for DashboardError {
    fn from(e: tera::Error) -> Self {
        Self::Template(e)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_messages() {
        let err = DashboardError::InvalidInput("bad date".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad date");

        let err = DashboardError::MissingField("beta");
        assert_eq!(err.to_string(), "Missing required field: beta");

        let err = DashboardError::from(stockdash_api::Error::RequestFailed);
        assert_eq!(err.to_string(), "API error: Request failed");
    }

    #[test]
    fn source_chaining() {
        let err = DashboardError::from(stockdash_api::Error::HttpStatus {
            status: 500,
            body: String::new(),
        });
        assert!(err.source().is_some());
        assert!(DashboardError::MissingField("sector").source().is_none());
    }
}
