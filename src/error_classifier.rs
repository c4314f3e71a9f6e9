//! Maps fetch failures to the level they are reported at.

use crate::logging::LogLevel;
use crate::roster::error::RosterError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &RosterError) -> LogLevel {
        if let RosterError::Decode(_) = error {
            // The API answered with something that is not a roster
            return LogLevel::Error;
        }
        match error.status() {
            // Temporary server issues
            Some(500..=599) => LogLevel::Warn,
            // Wrong URL or no access
            Some(401 | 403 | 404) => LogLevel::Error,
            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> RosterError {
        RosterError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_fetch_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(418)), LogLevel::Warn);

        let decode = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&RosterError::Decode(decode)),
            LogLevel::Error
        );
    }
}
