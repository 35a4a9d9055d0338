//! Workout types, per-variant parameter records and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workout type selected by a sensor package code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// `RUN`
    Running,
    /// `WLK`
    SportsWalking,
    /// `SWM`
    Swimming,
}

impl WorkoutType {
    /// Resolve a sensor package code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(WorkoutType::Swimming),
            "RUN" => Some(WorkoutType::Running),
            "WLK" => Some(WorkoutType::SportsWalking),
            _ => None,
        }
    }

    /// The sensor package code for this type.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Number of positional readings the variant is built from.
    pub fn param_count(&self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Running => write!(f, "Running"),
            WorkoutType::SportsWalking => write!(f, "SportsWalking"),
            WorkoutType::Swimming => write!(f, "Swimming"),
        }
    }
}

/// A running session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Steps taken
    pub action: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// A sports walking session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Steps taken
    pub action: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

/// A pool swimming session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Strokes taken
    pub action: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub lap_count: u32,
}

/// A completed training, ready for metric calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    /// The workout type of this training.
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Training::Running(_) => WorkoutType::Running,
            Training::SportsWalking(_) => WorkoutType::SportsWalking,
            Training::Swimming(_) => WorkoutType::Swimming,
        }
    }

    /// Duration in hours.
    pub fn duration_hours(&self) -> f64 {
        match self {
            Training::Running(t) => t.duration_hours,
            Training::SportsWalking(t) => t.duration_hours,
            Training::Swimming(t) => t.duration_hours,
        }
    }
}

impl From<Running> for Training {
    fn from(training: Running) -> Self {
        Training::Running(training)
    }
}

impl From<SportsWalking> for Training {
    fn from(training: SportsWalking) -> Self {
        Training::SportsWalking(training)
    }
}

impl From<Swimming> for Training {
    fn from(training: Swimming) -> Self {
        Training::Swimming(training)
    }
}

/// Errors related to reading packages and calculating training metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Code is not in the workout type mapping
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Wrong number of readings for the workout type
    #[error("{workout} expects {expected} readings, got {actual}")]
    ParameterArity {
        workout: WorkoutType,
        expected: usize,
        actual: usize,
    },

    /// Reading cannot be used for the named field
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    /// A computed metric is infinite or NaN (zero duration or height)
    #[error("Metric {field} is not finite")]
    NonFiniteMetric { field: &'static str },
}
