//! Result type alias for conversion operations

use crate::error::ConvertError;

/// Standard Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Extension trait for Result to provide additional convenience methods
pub trait ResultExt<T> {
    /// Log the error and continue with None if it only concerns the data
    fn log_and_continue(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn log_and_continue(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                if err.is_data_error() {
                    tracing::warn!("Skipping data object: {}", err);
                } else {
                    tracing::error!("Fatal error: {}", err);
                }
                None
            }
        }
    }
}
