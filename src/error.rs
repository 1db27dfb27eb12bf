//! Error types

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

use serde::Deserialize;

use crate::types::StatusCode;

/// An error occurred while calling the API.
///
/// `E` is the error type of the underlying HTTP client.
#[derive(Debug)]
pub enum Error<E = Box<dyn error::Error + Send + Sync>> {
    /// An error from the underlying HTTP client or from the response body.
    Service(E),
    /// The API responded with a non-success status code.
    Http {
        status: StatusCode,
        /// Error details from the response body. Empty if the body did not carry any.
        errors: Vec<ApiError>,
    },
    /// The response body was not the expected JSON, or lacked a required field.
    Json(serde_json::Error),
    /// An error occured while decoding a gzip-encoded response body.
    Gzip(io::Error),
    /// The request could not be built, e.g. because of an invalid URL.
    Request(http::Error),
}

/// An entry of the `errors` array returned by the API along with an error status.
///
/// See the [Twitter Developer Documentation][1] for the list of error codes.
///
/// [1]: https://developer.twitter.com/en/support/twitter-api/error-troubleshooting
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct ApiError {
    pub code: u32,
    pub message: String,
}

impl<E> Error<E> {
    /// The HTTP status code, if the error was caused by an error response.
    pub fn status_code(&self) -> Option<StatusCode> {
        match *self {
            Error::Http { status, .. } => Some(status),
            _ => None,
        }
    }

    /// The first API error code in the error response, if any.
    pub fn error_code(&self) -> Option<u32> {
        match *self {
            Error::Http { ref errors, .. } => errors.first().map(|e| e.code),
            _ => None,
        }
    }

    /// Builds an `Http` error from a status code and the response body.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default)]
            errors: Vec<ApiError>,
        }

        let errors = serde_json::from_slice::<Body>(body)
            .map(|b| b.errors)
            .unwrap_or_default();
        Error::Http { status, errors }
    }
}

impl<E: error::Error + 'static> error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Service(ref e) => Some(e),
            Error::Http { .. } => None,
            Error::Json(ref e) => Some(e),
            Error::Gzip(ref e) => Some(e),
            Error::Request(ref e) => Some(e),
        }
    }
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Service(ref e) => Display::fmt(e, f),
            Error::Http {
                ref status,
                ref errors,
            } => {
                Display::fmt(status, f)?;
                for e in errors {
                    write!(f, "; {} (code {})", e.message, e.code)?;
                }
                Ok(())
            }
            Error::Json(ref e) => Display::fmt(e, f),
            Error::Gzip(ref e) => Display::fmt(e, f),
            Error::Request(ref e) => Display::fmt(e, f),
        }
    }
}

impl<E> From<serde_json::Error> for Error<E> {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl<E> From<http::Error> for Error<E> {
    fn from(e: http::Error) -> Self {
        Error::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Error = super::Error<io::Error>;

    #[test]
    fn from_error_response() {
        let body = br#"{"errors":[{"code":34,"message":"Sorry, that page does not exist."}]}"#;
        let e = Error::from_response(StatusCode::NOT_FOUND, body);

        assert_eq!(e.status_code(), Some(StatusCode::NOT_FOUND));
        assert_eq!(e.error_code(), Some(34));
        assert_eq!(
            e.to_string(),
            "404 Not Found; Sorry, that page does not exist. (code 34)"
        );
    }

    #[test]
    fn from_non_json_error_response() {
        let e = Error::from_response(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>");
        assert_eq!(e.status_code(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(e.error_code(), None);
        assert_eq!(e.to_string(), "502 Bad Gateway");
    }

    #[test]
    fn source() {
        use std::error::Error as _;

        let e = Error::Service(io::Error::new(io::ErrorKind::Other, "oops"));
        assert!(e.source().is_some());
        assert!(Error::from_response(StatusCode::FORBIDDEN, b"")
            .source()
            .is_none());
    }
}
