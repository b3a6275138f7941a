use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::SubmitError;

/// One of the four measurement inputs. The string form is the name used both
/// on the wire and for the DOM `name`/`id` of the matching input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::SepalLength,
        Field::SepalWidth,
        Field::PetalLength,
        Field::PetalWidth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::SepalLength => "Sepal Length (cm)",
            Field::SepalWidth => "Sepal Width (cm)",
            Field::PetalLength => "Petal Length (cm)",
            Field::PetalWidth => "Petal Width (cm)",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Field::SepalLength => 0,
            Field::SepalWidth => 1,
            Field::PetalLength => 2,
            Field::PetalWidth => 3,
        }
    }
}

/// The sample sent to `/predict`. Serializes to exactly the four fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl Measurement {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::SepalLength => self.sepal_length,
            Field::SepalWidth => self.sepal_width,
            Field::PetalLength => self.petal_length,
            Field::PetalWidth => self.petal_width,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::SepalLength => &mut self.sepal_length,
            Field::SepalWidth => &mut self.sepal_width,
            Field::PetalLength => &mut self.petal_length,
            Field::PetalWidth => &mut self.petal_width,
        };
        *slot = value;
    }

    pub fn to_array(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    /// Rejects the first field that is NaN or infinite. JSON has no encoding
    /// for either, so nothing non-finite may reach the wire.
    pub fn validate(&self) -> Result<(), SubmitError> {
        match Field::ALL.into_iter().find(|f| !self.get(*f).is_finite()) {
            Some(field) => Err(SubmitError::Validation { field }),
            None => Ok(()),
        }
    }
}
