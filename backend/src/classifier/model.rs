use shared::{Field, Measurement};
use std::sync::Arc;
use thiserror::Error;

use super::config::{ClassSpec, ModelConfig};

#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("{0} must be a finite number")]
    InvalidInput(Field),
    #[error("model has no classes")]
    Empty,
}

/// Nearest-centroid classifier over per-species mean measurements.
#[derive(Clone)]
pub struct Model {
    classes: Arc<[ClassSpec]>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl Model {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            classes: config.classes.into(),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.label.as_str())
    }

    pub fn predict(&self, measurement: &Measurement) -> Result<&str, InferenceError> {
        let features = measurement.to_array();
        if let Some(i) = features.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::InvalidInput(Field::ALL[i]));
        }

        self.classes
            .iter()
            .map(|class| (class, squared_distance(&features, &class.centroid)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(class, _)| class.label.as_str())
            .ok_or(InferenceError::Empty)
    }
}

fn squared_distance(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: [f64; 4]) -> Measurement {
        Measurement {
            sepal_length: values[0],
            sepal_width: values[1],
            petal_length: values[2],
            petal_width: values[3],
        }
    }

    #[test]
    fn classifies_typical_samples() {
        let model = Model::default();
        assert_eq!(model.predict(&sample([5.1, 3.5, 1.4, 0.2])), Ok("setosa"));
        assert_eq!(model.predict(&sample([5.9, 2.8, 4.3, 1.3])), Ok("versicolor"));
        assert_eq!(model.predict(&sample([6.3, 3.3, 6.0, 2.5])), Ok("virginica"));
    }

    #[test]
    fn rejects_non_finite_input() {
        let model = Model::default();
        assert_eq!(
            model.predict(&sample([5.1, f64::NAN, 1.4, 0.2])),
            Err(InferenceError::InvalidInput(Field::SepalWidth))
        );
    }

    #[test]
    fn empty_model_cannot_predict() {
        let model = Model::new(ModelConfig {
            version: 1,
            classes: Vec::new(),
        });
        assert_eq!(
            model.predict(&sample([5.1, 3.5, 1.4, 0.2])),
            Err(InferenceError::Empty)
        );
    }

    #[test]
    fn labels_follow_config_order() {
        let model = Model::default();
        let labels: Vec<&str> = model.labels().collect();
        assert_eq!(labels, ["setosa", "versicolor", "virginica"]);
    }
}
