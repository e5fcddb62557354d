//! Error types for fetching readings and updating the page.

/// A failure to get a reading for a city.
///
/// All variants are handled the same way: logged, then treated as "no data".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("could not decode reading: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A failure to find or modify an element on the page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no element with id {0:?}")]
    MissingElement(String),

    #[error("no document available")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl PageError {
    pub(crate) fn missing<S: Into<String>>(id: S) -> Self {
        PageError::MissingElement(id.into())
    }
}
