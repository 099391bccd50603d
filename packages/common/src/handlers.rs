//! Default handlers for the builder `on_result` / `on_error` hooks

/// Pass-through result handler that records completion
pub fn on_result<T>(result: T) -> T {
    tracing::debug!("cipher operation completed");
    result
}

/// Pass-through error handler that logs the error before returning it
pub fn on_error<T: std::fmt::Display>(error: T) -> T {
    tracing::warn!("cipher operation failed: {error}");
    error
}
