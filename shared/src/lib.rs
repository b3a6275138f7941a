pub mod controller;
pub mod error;
pub mod form;
pub mod measurement;
pub mod outcome;
pub mod protocol;

pub use controller::{PredictionClient, SubmissionController};
pub use error::SubmitError;
pub use form::FormState;
pub use measurement::{Field, Measurement};
pub use outcome::{Settlement, SubmissionOutcome, settle};
pub use protocol::{DEFAULT_ENDPOINT, ErrorResponse, PredictResponse, predict_url};
