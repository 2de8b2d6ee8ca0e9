use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading or saving preferences.
pub enum PreferenceError {
    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    /// The preference document is not valid JSON.
    Json(#[from] serde_json::Error),

    #[error("preference document must be a JSON object")]
    /// The top-level JSON value is not an object.
    NotAnObject,

    #[error("invalid value for preference '{key}': expected {expected}")]
    /// A preference holds a value of an unsupported type.
    InvalidValue {
        /// The preference key.
        key: String,
        /// Description of the accepted types.
        expected: &'static str,
    },
}
