use log::{debug, info, warn};

use crate::form::FormState;
use crate::measurement::Measurement;
use crate::outcome::{Settlement, SubmissionOutcome, settle};

/// Sends one measurement to the prediction endpoint. Implementations never
/// fail: anything that stops the request from completing comes back as
/// `Settlement::Failed`.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn send(&self, measurement: &Measurement) -> Settlement;
}

/// Runs submissions of a [`FormState`] against one client, at most one at a
/// time.
pub struct SubmissionController<C> {
    client: C,
}

impl<C: PredictionClient> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Starts a cycle. Returns the measurement to dispatch, or `None` when a
    /// request is already in flight or the form holds a non-numeric field.
    pub fn begin(&self, form: &mut FormState) -> Option<Measurement> {
        if form.is_loading() {
            debug!("Submit ignored: a prediction request is already in flight");
            return None;
        }

        let measurement = *form.measurement();
        if let Err(err) = measurement.validate() {
            warn!("Submit rejected: {}", err);
            form.set_outcome(SubmissionOutcome::Failure(err.to_string()));
            return None;
        }

        form.set_outcome(SubmissionOutcome::InFlight);
        Some(measurement)
    }

    pub fn finish(&self, form: &mut FormState, settlement: Settlement) {
        let next = settle(form.outcome(), settlement);
        if let SubmissionOutcome::Success(prediction) = &next {
            info!("Prediction received: {:?}", prediction);
        }
        form.set_outcome(next);
    }

    /// One full cycle. Returns whether a request was dispatched.
    pub async fn submit(&self, form: &mut FormState) -> bool {
        let Some(measurement) = self.begin(form) else {
            return false;
        };
        let settlement = self.client.send(&measurement).await;
        self.finish(form, settlement);
        true
    }
}
