use cloak::ControlError;
use napi::{self, Status};

/// Map control errors to NAPI errors
pub fn map_error(err: ControlError) -> napi::Error {
    match err {
        ControlError::InvalidArgument(msg) => {
            napi::Error::new(Status::InvalidArg, format!("INVALID_ARGUMENT: {}", msg))
        }
        ControlError::UnsupportedPlatform(msg) => {
            napi::Error::new(Status::GenericFailure, format!("UNSUPPORTED_PLATFORM: {}", msg))
        }
        ControlError::PlatformError(msg) => {
            napi::Error::new(Status::GenericFailure, format!("PLATFORM_ERROR: {}", msg))
        }
        ControlError::Config(msg) => {
            napi::Error::new(Status::InvalidArg, format!("CONFIGURATION_ERROR: {}", msg))
        }
        ControlError::Internal(msg) => {
            napi::Error::new(Status::GenericFailure, format!("INTERNAL_ERROR: {}", msg))
        }
    }
}

