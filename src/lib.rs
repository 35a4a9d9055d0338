//! Fitness Tracker - Workout Metrics Calculator
//!
//! Computes distance, mean speed and calories burned from raw sensor
//! readings for running, sports walking and swimming, and renders a
//! formatted training summary.

pub mod metrics;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::summary::InfoMessage;
pub use storage::config::AppConfig;
pub use workouts::reader::read_package;
pub use workouts::types::{Training, WorkoutError, WorkoutType};
