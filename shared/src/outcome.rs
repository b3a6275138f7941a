use log::{debug, warn};

use crate::error::SubmitError;
use crate::protocol::string_member;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    /// `None` when the endpoint answered 2xx without a string `prediction`.
    Success(Option<String>),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight)
    }

    pub fn from_result(result: Result<Option<String>, SubmitError>) -> Self {
        match result {
            Ok(prediction) => SubmissionOutcome::Success(prediction),
            Err(err) => SubmissionOutcome::Failure(err.to_string()),
        }
    }
}

/// What a transport hands back once a request is done.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Responded { status: u16, body: String },
    Failed(String),
}

impl Settlement {
    /// Maps a settlement onto the prediction it carries or the error that
    /// replaced it.
    pub fn classify(self) -> Result<Option<String>, SubmitError> {
        match self {
            Settlement::Failed(detail) => Err(SubmitError::Transport(detail)),
            Settlement::Responded { status, body } if (200..300).contains(&status) => {
                string_member(&body, "prediction")
                    .map_err(|e| SubmitError::Transport(format!("malformed response body: {}", e)))
            }
            Settlement::Responded { status, body } => {
                let message = string_member(&body, "error").unwrap_or_else(|e| {
                    debug!("Unreadable error body for status {}: {}", status, e);
                    None
                });
                Err(SubmitError::application(message))
            }
        }
    }
}

/// Next outcome after `settlement` arrives. Only an in-flight submission can
/// settle; anything else is a stale settlement and leaves `prior` as it was.
pub fn settle(prior: &SubmissionOutcome, settlement: Settlement) -> SubmissionOutcome {
    if !prior.is_in_flight() {
        warn!("Dropping settlement received while {:?}", prior);
        return prior.clone();
    }

    let result = settlement.classify();
    if let Err(SubmitError::Transport(detail)) = &result {
        warn!("Prediction request failed: {}", detail);
    }
    SubmissionOutcome::from_result(result)
}
