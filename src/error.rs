//! Error types
//!
//! None of these ever reach the page: every error is scoped to the feature
//! that raised it, logged, and the remaining features keep running.

use thiserror::Error;

/// Errors raised while wiring or running a page feature.
#[derive(Debug, Error)]
pub enum ChromeError {
    /// A queried element is not in the document
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A slider's embedded configuration blob is not valid JSON
    #[error("malformed config for {target}: {source}")]
    MalformedConfig {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// An external collaborator (slider, lightbox, animator) failed
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    /// A bootstrap step panicked
    #[error("{step} faulted: {message}")]
    Fault {
        step: &'static str,
        message: String,
    },
}

impl ChromeError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator,
            message: message.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, ChromeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ChromeError::missing(".mobile-nav-toggle").to_string(),
            "missing element: .mobile-nav-toggle"
        );
        assert_eq!(
            ChromeError::collaborator("lightbox", "not loaded").to_string(),
            "lightbox failed: not loaded"
        );
    }

    #[test]
    fn test_fault_message() {
        let err = ChromeError::Fault {
            step: "lightbox",
            message: "GLightbox is not defined".to_string(),
        };
        assert_eq!(err.to_string(), "lightbox faulted: GLightbox is not defined");
    }

    #[test]
    fn test_malformed_config_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ loop: true").unwrap_err();
        let err = ChromeError::MalformedConfig {
            target: "slider #0".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("malformed config for slider #0"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
