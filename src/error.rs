#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    MissingParameter(&'static str),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("{0}")]
    Platform(String),
    #[error("UI thread dropped the request")]
    UiThread,
    #[cfg(target_os = "android")]
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) const ERROR_COLOR_MISSING: &str = "color must be provided.";
pub(crate) const ERROR_STYLE_MISSING: &str = "style must be provided.";
pub(crate) const ERROR_STYLE_AND_COLOR_MISSING: &str = "style and color must be provided.";
pub(crate) const ERROR_LIGHT_MISSING: &str = "light must be provided.";
pub(crate) const ERROR_ENFORCE_MISSING: &str = "enforce must be provided.";
pub(crate) const ERROR_ENABLED_MISSING: &str = "enabled must be provided.";
pub(crate) const ERROR_ENTER_MISSING: &str = "enter must be provided.";
pub(crate) const ERROR_GESTURE_FLAG_MISSING: &str =
    "disableEdgeToEdgeForGesture must be provided.";

/// Unwraps an optional command argument or rejects with the fixed message.
pub(crate) fn required<T>(value: Option<T>, message: &'static str) -> Result<T> {
    value.ok_or(Error::MissingParameter(message))
}
