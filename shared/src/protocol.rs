use serde::{Deserialize, Serialize};

pub const PREDICT_PATH: &str = "/predict";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Success body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}

/// Failure body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn predict_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), PREDICT_PATH)
}

/// Reads a top-level string member out of a JSON body. `Err` means the body
/// was not JSON at all; `Ok(None)` means it was, but the member is missing or
/// not a string.
pub(crate) fn string_member(body: &str, key: &str) -> Result<Option<String>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(value.get(key).and_then(|v| v.as_str()).map(str::to_owned))
}
