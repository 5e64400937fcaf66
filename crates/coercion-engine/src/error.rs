//! Error types for coercion operations.

use thiserror::Error;

/// Error raised by a caller-supplied [`ValueOf`](crate::ValueOf) hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while coercing or building values.
///
/// Malformed input is never an error: it coerces to NaN.
#[derive(Error, Debug)]
pub enum CoerceError {
    /// A primitive-conversion hook failed. The hook's own error is carried
    /// untouched and can be recovered with `downcast_ref`.
    #[error("value-of hook failed: {0}")]
    Hook(#[source] HookError),

    /// The input string was not valid JSON (interop path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CoerceError {
    /// The error returned by the hook, if this is a hook failure.
    pub fn hook_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            CoerceError::Hook(err) => Some(err.as_ref()),
            CoerceError::JsonParse(_) => None,
        }
    }
}

/// Convenience alias used throughout coercion-engine.
pub type Result<T> = std::result::Result<T, CoerceError>;
