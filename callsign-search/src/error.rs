///! Error types for the registry lookup and the geocoding stage

use reqwest::StatusCode;
use thiserror::Error;

/// Fatal lookup failures. Each maps to its own process exit status.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("ERROR: Could not send HTTP request to ARRL URL: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("ERROR: Non-200 HTTP response code retrieved from ARRL URL ({0})")]
    BadStatus(StatusCode),

    #[error("ERROR: Could not get proper response from ARRL URL")]
    Parse(String),
}

impl SearchError {
    /// Exit status reported by the binary for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            SearchError::Transport(_) => 2,
            SearchError::BadStatus(_) => 3,
            SearchError::Parse(_) => 4,
        }
    }
}

/// Non-fatal failures while deriving the grid square.
///
/// The display strings are the diagnostics printed to stdout when the
/// grid square row is dropped.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Error: The geocoding service timed out.")]
    TimedOut,

    #[error("Error: An error occurred with the geocoding service.\n{0}")]
    Service(String),

    #[error("Error: No location found for address: {0}")]
    NoResult(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Error: No address line in registry response (found {0} detail lines)")]
    AddressMissing(usize),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::TimedOut
        } else if e.is_decode() {
            GeocodeError::Unexpected(e.to_string())
        } else {
            GeocodeError::Service(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SearchError::BadStatus(StatusCode::NOT_FOUND).exit_code(), 3);
        assert_eq!(SearchError::Parse("no title".into()).exit_code(), 4);
    }

    #[test]
    fn test_geocode_messages_are_distinct() {
        let messages = [
            GeocodeError::TimedOut.to_string(),
            GeocodeError::Service("503".into()).to_string(),
            GeocodeError::NoResult("Nowhere".into()).to_string(),
            GeocodeError::Unexpected("bad json".into()).to_string(),
            GeocodeError::AddressMissing(1).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(messages[0], "Error: The geocoding service timed out.");
    }
}
