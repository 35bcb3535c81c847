#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The response carried a `reason` outside the canonical taxonomy, or a
    /// txid-bearing shape with no usable reason at all. `reason` holds the
    /// raw string when one was present.
    #[error("unrecognized rejection reason: {}", .reason.as_deref().unwrap_or("<none>"))]
    UnrecognizedRejection { reason: Option<String> },

    #[error("malformed broadcast response: {reason}")]
    MalformedResponse { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
