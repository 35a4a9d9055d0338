//! Metrics module for training calculations and summaries.

pub mod calculator;
pub mod summary;

pub use calculator::{calories, distance, mean_speed, show_training_info};
pub use summary::InfoMessage;
