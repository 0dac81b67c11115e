use std::fmt::{Display, Formatter, Result};

use http_fetcher::FetchError;
use strum::IntoStaticStr;

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Error {
    InvalidRequest(String),
    NetworkError(String),
    TimeoutError(String),
    HttpStatus(u16),
    BodyReadError(String),
    DecodeError(String),
}

impl Error {
    /// Stable name of the variant, used as the `error_kind` log field.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::InvalidRequest(message) => write!(f, "Invalid request: {}", message),
            Error::NetworkError(message) => write!(f, "Network error: {}", message),
            Error::TimeoutError(message) => write!(f, "Timeout: {}", message),
            Error::HttpStatus(status) => write!(f, "Unexpected HTTP status: {}", status),
            Error::BodyReadError(message) => write!(f, "Body read error: {}", message),
            Error::DecodeError(message) => write!(f, "Decode error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidRequest(message) => Error::InvalidRequest(message),
            FetchError::Network(message) => Error::NetworkError(message),
            FetchError::Timeout(message) => Error::TimeoutError(message),
            FetchError::HttpStatus(status) => Error::HttpStatus(status),
            FetchError::BodyRead(message) => Error::BodyReadError(message),
            FetchError::Decode(message) => Error::DecodeError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_keep_their_kind() {
        let test_cases = vec![
            (FetchError::InvalidRequest("x".into()), "invalid_request"),
            (FetchError::Network("x".into()), "network_error"),
            (FetchError::Timeout("x".into()), "timeout_error"),
            (FetchError::HttpStatus(404), "http_status"),
            (FetchError::BodyRead("x".into()), "body_read_error"),
            (FetchError::Decode("x".into()), "decode_error"),
        ];
        for (fetch_error, kind) in test_cases {
            assert_eq!(Error::from(fetch_error).kind(), kind);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::DecodeError("expected value at line 1 column 1".to_string()).to_string(),
            "Decode error: expected value at line 1 column 1"
        );
        assert_eq!(Error::HttpStatus(502).to_string(), "Unexpected HTTP status: 502");
    }
}
