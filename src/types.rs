pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Receives the handler currently registered at a pattern (if any) and
/// returns the one to store in its place.
pub type TransformFn<H> = dyn FnOnce(Option<&H>) -> Result<H, BoxError> + Send;
