//! Error types for the yescaptcha client.

use thiserror::Error;

/// Main error type for yescaptcha operations.
///
/// Every failure mode carries a stable string code (see [`CaptchaError::code`])
/// so callers can branch programmatically without matching on variants.
#[derive(Error, Debug)]
pub enum CaptchaError {
    /// No response from the service: connect failure, per-request timeout,
    /// or a body that never arrived.
    #[error("{url}: no response: {source}")]
    NoResponse {
        url: String,
        #[source]
        source: rquest::Error,
    },

    /// The service answered with a non-2xx HTTP status.
    #[error("{url} returned status code: {status}")]
    BadStatus { url: String, status: u16 },

    /// Application-level rejection (`errorId != 0`). Code and description
    /// are carried verbatim from the response payload.
    #[error("{code}: {description}")]
    Remote { code: String, description: String },

    /// The task exists but is still being solved. Transient and expected
    /// while polling.
    #[error("captcha is still being solved")]
    Processing,

    /// The overall polling budget elapsed without a ready result.
    #[error("timed out waiting for the captcha result")]
    Timeout,

    /// The response body did not decode as the expected JSON shape.
    #[error("bad response body: {0}")]
    BadResponse(#[from] serde_json::Error),

    /// HTTP client construction failed (bad proxy URL, TLS setup).
    #[error("HTTP client error: {0}")]
    Http(#[from] rquest::Error),
}

impl CaptchaError {
    /// Stable code for programmatic branching. For remote rejections this is
    /// the service-supplied `errorCode` verbatim.
    pub fn code(&self) -> &str {
        match self {
            CaptchaError::NoResponse { .. } => "ERROR_POST_NOT_RESPONSE",
            CaptchaError::BadStatus { .. } => "ERROR_POST_STATUS_CODE",
            CaptchaError::Remote { code, .. } => code,
            CaptchaError::Processing => "ERROR_PROCESSING",
            CaptchaError::Timeout => "ERROR_WAIT_CAPTCHA_TIME_OUT",
            CaptchaError::BadResponse(_) => "ERROR_BAD_RESPONSE",
            CaptchaError::Http(_) => "ERROR_HTTP_CLIENT",
        }
    }
}

/// Result type alias for yescaptcha operations.
pub type Result<T> = std::result::Result<T, CaptchaError>;
