/// Errors raised by the catalog repository.
///
/// A missing catalog file is not an error (the shop is just empty); a file
/// that exists but fails to parse is, and propagates to a generic server
/// error on whichever request hit it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    Malformed(#[from] serde_json::Error),
}
