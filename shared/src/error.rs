use thiserror::Error;

use crate::measurement::Field;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Everything that can end a submission without a prediction. The `Display`
/// output is exactly what the form shows the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status.
    #[error("{0}")]
    Application(String),

    /// The request never completed or its body could not be read. The detail
    /// goes to the logs only.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Transport(String),

    /// A field did not hold a finite number at submit time.
    #[error("{} must be a number", .field.label())]
    Validation { field: Field },
}

impl SubmitError {
    pub fn application(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => SubmitError::Application(message),
            _ => SubmitError::Application(UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }
}
