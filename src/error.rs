//! Error types returned by the Postmark client.

use serde_json::Value;

/// Errors that can occur while talking to the Postmark API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure: connection, TLS, proxy or reading the body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The payload could not be serialized or the response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Postmark answered with a non-zero `ErrorCode`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A configured token or user agent is not a valid HTTP header value.
    #[error("invalid {0}: not a valid header value")]
    InvalidHeader(&'static str),
}

impl Error {
    /// The application-level error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether Postmark itself rejected the call.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }
}

/// Application-level error reported in a Postmark response body.
///
/// See <https://postmarkapp.com/developer/api/overview#error-codes> for the
/// meaning of individual codes. The display text is the provider message.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Numeric Postmark error code.
    pub error_code: i64,
    /// Human readable explanation.
    pub message: String,
}

impl ApiError {
    /// Extract an error from a decoded response body.
    ///
    /// Only JSON objects carrying a non-zero integer `ErrorCode` qualify;
    /// arrays and successful envelopes (`"ErrorCode": 0`) yield `None`.
    pub(crate) fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let error_code = object.get("ErrorCode").and_then(Value::as_i64)?;
        if error_code == 0 {
            return None;
        }

        let message = object
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            error_code,
            message,
        })
    }
}
