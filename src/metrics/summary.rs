//! Training summary message.

use serde::{Deserialize, Serialize};

/// Computed summary of one completed training.
///
/// Built by [`crate::metrics::calculator::show_training_info`]; all numeric
/// fields are finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout type label
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories burned in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary as a single line, three decimals per value.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
