//! Sensor package reader.
//!
//! Turns a workout code and a flat list of sensor readings into a typed
//! [`Training`]. Readings are consumed positionally:
//! `action, duration, weight` followed by `height` for walking or
//! `pool_length, lap_count` for swimming.

use crate::workouts::types::{
    Running, SportsWalking, Swimming, Training, WorkoutError, WorkoutType,
};

/// Read a sensor package into a training.
///
/// Fails with [`WorkoutError::UnknownWorkoutType`] for an unmapped code and
/// [`WorkoutError::ParameterArity`] when the reading count does not match the
/// workout type. Missing readings are never padded.
pub fn read_package(code: &str, readings: &[f64]) -> Result<Training, WorkoutError> {
    let workout = WorkoutType::from_code(code)
        .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))?;

    let expected = workout.param_count();
    if readings.len() != expected {
        return Err(WorkoutError::ParameterArity {
            workout,
            expected,
            actual: readings.len(),
        });
    }

    let action = parse_count("action", readings[0])?;
    let duration_hours = readings[1];
    let weight_kg = readings[2];

    let training = match workout {
        WorkoutType::Running => Training::Running(Running {
            action,
            duration_hours,
            weight_kg,
        }),
        WorkoutType::SportsWalking => Training::SportsWalking(SportsWalking {
            action,
            duration_hours,
            weight_kg,
            height_cm: readings[3],
        }),
        WorkoutType::Swimming => Training::Swimming(Swimming {
            action,
            duration_hours,
            weight_kg,
            pool_length_m: readings[3],
            lap_count: parse_count("lap_count", readings[4])?,
        }),
    };

    Ok(training)
}

/// Parse a reading that must be a whole, nonnegative count.
fn parse_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}
