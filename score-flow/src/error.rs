use thiserror::Error;

/// Classified outcome of a failed submission attempt.
///
/// Classification happens inside the scoring client and the submission
/// controller; callers only ever observe these variants, never raw
/// transport errors. Nothing is retried; every failure is terminal for
/// its attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Non-2xx response. The message is the body's `message` field when
    /// one can be decoded, otherwise the canonical status reason.
    #[error("Server Error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Request dispatched but no reply arrived (connection-level failure).
    #[error("No response from server. Please check if the API is running.")]
    NoResponse,

    /// The client-side bound elapsed before a reply arrived.
    #[error("Request timeout. Please try again.")]
    Timeout,

    /// 2xx response whose body is missing the expected `assessment`.
    #[error("Unexpected response from server: no assessment returned.")]
    MalformedResponse,

    /// Anything else.
    #[error("Failed to fetch result: {0}")]
    Unknown(String),
}

impl SubmitError {
    /// Map a transport-level failure onto the taxonomy.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if err.is_connect() || err.is_request() {
            SubmitError::NoResponse
        } else if err.is_decode() {
            SubmitError::MalformedResponse
        } else {
            SubmitError::Unknown(err.to_string())
        }
    }
}
