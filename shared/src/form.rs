use log::debug;
use std::str::FromStr;

use crate::measurement::{Field, Measurement};
use crate::outcome::SubmissionOutcome;

/// The whole client session: the measurement being edited, the text the user
/// typed for each field, and the outcome of the latest submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    measurement: Measurement,
    inputs: [String; 4],
    outcome: SubmissionOutcome,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            measurement: Measurement::default(),
            inputs: std::array::from_fn(|_| "0".to_string()),
            outcome: SubmissionOutcome::Idle,
        }
    }

    /// Overwrites one field. Text that does not parse is stored as NaN and
    /// only rejected at submit time.
    pub fn update(&mut self, field: Field, raw: &str) {
        let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.measurement.set(field, value);
        self.inputs[field.index()] = raw.to_string();
    }

    pub fn update_named(&mut self, name: &str, raw: &str) {
        match Field::from_str(name) {
            Ok(field) => self.update(field, raw),
            Err(_) => debug!("Ignoring update for unknown field {:?}", name),
        }
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn input(&self, field: Field) -> &str {
        &self.inputs[field.index()]
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub(crate) fn set_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcome = outcome;
    }

    pub fn is_loading(&self) -> bool {
        self.outcome.is_in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&str> {
        match &self.outcome {
            SubmissionOutcome::Success(prediction) => prediction.as_deref(),
            _ => None,
        }
    }
}
