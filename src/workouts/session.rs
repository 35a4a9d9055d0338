//! Sensor package processing.
//!
//! Applies the caller-side checks around [`read_package`]: a package without
//! a workout code or with no activity yet is never read, and a training with
//! a non-positive duration never reaches the calculator.

use crate::metrics::calculator::show_training_info;
use crate::metrics::summary::InfoMessage;
use crate::workouts::reader::read_package;
use crate::workouts::types::WorkoutError;
use serde::{Deserialize, Serialize};

/// Raw package received from the sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (`RUN`, `WLK`, `SWM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Positional readings
    #[serde(default)]
    pub readings: Vec<f64>,
}

impl SensorPackage {
    /// Create a package with a workout code.
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: Some(code.into()),
            readings,
        }
    }

    /// Create a package that arrived without a workout code.
    pub fn without_code(readings: Vec<f64>) -> Self {
        Self {
            code: None,
            readings,
        }
    }
}

/// Result of processing one sensor package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum PackageOutcome {
    /// Metrics were calculated
    Summary(InfoMessage),
    /// The first reading shows no activity yet
    NotStarted,
    /// The package carries no workout code
    MissingWorkoutType,
    /// Readings cannot produce finite metrics
    SensorFault,
    /// The reader rejected the package
    #[serde(serialize_with = "serialize_error")]
    Rejected(WorkoutError),
}

fn serialize_error<S: serde::Serializer>(err: &WorkoutError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&err.to_string())
}

impl std::fmt::Display for PackageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageOutcome::Summary(message) => write!(f, "{}", message),
            PackageOutcome::NotStarted => write!(f, "You have not started training yet"),
            PackageOutcome::MissingWorkoutType => {
                write!(f, "Workout type is missing or the sensors are faulty")
            }
            PackageOutcome::SensorFault => write!(f, "The sensors are faulty"),
            PackageOutcome::Rejected(err) => write!(f, "Workout type not determined: {}", err),
        }
    }
}

/// Process a single sensor package.
pub fn process_package(package: &SensorPackage) -> PackageOutcome {
    let Some(code) = package.code.as_deref() else {
        tracing::warn!("Package without workout code");
        return PackageOutcome::MissingWorkoutType;
    };

    match package.readings.first() {
        Some(&action) if action > 0.0 => {}
        _ => {
            tracing::debug!(code, "No activity recorded yet");
            return PackageOutcome::NotStarted;
        }
    }

    let training = match read_package(code, &package.readings) {
        Ok(training) => training,
        Err(e) => {
            tracing::warn!(code, "Package rejected: {}", e);
            return PackageOutcome::Rejected(e);
        }
    };

    let duration = training.duration_hours();
    if duration <= 0.0 {
        tracing::warn!(code, duration, "Non-positive duration");
        return PackageOutcome::SensorFault;
    }

    match show_training_info(&training) {
        Ok(message) => {
            tracing::debug!(code, calories = message.calories, "Training processed");
            PackageOutcome::Summary(message)
        }
        Err(e) => {
            tracing::warn!(code, "Metric calculation failed: {}", e);
            PackageOutcome::SensorFault
        }
    }
}

/// Process a batch of sensor packages in order.
pub fn run_packages(packages: &[SensorPackage]) -> Vec<PackageOutcome> {
    packages.iter().map(process_package).collect()
}
