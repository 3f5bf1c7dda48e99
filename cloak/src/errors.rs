use thiserror::Error;

/// Errors produced by the desktop control layer
#[derive(Debug, Error)]
pub enum ControlError {
    /// A host value could not be converted into a native argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No native engine exists for the current platform
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The operating system reported a failure
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// A configuration value could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for ControlError {
    fn from(err: windows::core::Error) -> Self {
        ControlError::PlatformError(err.to_string())
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(err: serde_json::Error) -> Self {
        ControlError::Config(err.to_string())
    }
}
