//! Error type shared by the guard capabilities.
//!
//! None of these reach the user: the guard logs them and degrades to
//! "flag absent" or "not a reload".

/// Failure raised by a session store, navigation context, or page surface.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// A browser facility (window, storage, body) is missing.
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    /// A JS call threw; carries the stringified exception.
    #[error("javascript error: {0}")]
    Js(String),
    /// An inline guard configuration block could not be parsed.
    #[error("invalid guard config: {0}")]
    Config(#[from] serde_json::Error),
}
