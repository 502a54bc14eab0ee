//! Open-data client error types.

/// Errors that can occur when loading a dataset.
///
/// The status code of the response is never inspected: a non-2xx response
/// with a JSON body loads successfully.
#[derive(Debug, thiserror::Error)]
pub enum OpenDataError {
    /// Request never produced a response body (DNS, connect, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
