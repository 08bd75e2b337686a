//! Result type alias for client operations.

use super::context::ErrorContext;
use super::findr_error::FindrError;

/// Type alias for Results using FindrError.
pub type FindrResult<T> = Result<T, FindrError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> FindrResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> FindrResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<FindrError>,
{
    fn context(self, ctx: ErrorContext) -> FindrResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> FindrResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
