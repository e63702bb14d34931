/// Errors raised while reading a catalog search response.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
