//! Training metric calculations.
//!
//! Distance, mean speed and calorie formulas per workout type. The calorie
//! coefficients are empirical approximations and are reproduced exactly.

use crate::metrics::summary::InfoMessage;
use crate::workouts::types::{Running, SportsWalking, Swimming, Training, WorkoutError};

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters for running and walking.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Stroke length in meters for swimming.
pub const STROKE_LENGTH_M: f64 = 1.38;

mod running {
    /// Speed multiplier.
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Speed offset.
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    /// Weight multiplier for the base term.
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier for the speed/height term.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    /// Speed offset.
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier.
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Distance covered in kilometers for an action count and step length.
fn distance_for(action: u32, step_length_m: f64) -> f64 {
    action as f64 * step_length_m / M_IN_KM
}

/// Distance covered in kilometers.
///
/// Swimming uses its stroke length here even though its mean speed is
/// derived from the pool instead.
pub fn distance(training: &Training) -> f64 {
    match training {
        Training::Running(t) => distance_for(t.action, STEP_LENGTH_M),
        Training::SportsWalking(t) => distance_for(t.action, STEP_LENGTH_M),
        Training::Swimming(t) => distance_for(t.action, STROKE_LENGTH_M),
    }
}

/// Mean speed in km/h.
pub fn mean_speed(training: &Training) -> f64 {
    match training {
        Training::Running(_) | Training::SportsWalking(_) => {
            distance(training) / training.duration_hours()
        }
        Training::Swimming(t) => swimming_speed(t),
    }
}

fn swimming_speed(t: &Swimming) -> f64 {
    t.pool_length_m * t.lap_count as f64 / M_IN_KM / t.duration_hours
}

/// Calories burned in kcal.
pub fn calories(training: &Training) -> f64 {
    let speed = mean_speed(training);
    match training {
        Training::Running(t) => running_calories(t, speed),
        Training::SportsWalking(t) => walking_calories(t, speed),
        Training::Swimming(t) => swimming_calories(t, speed),
    }
}

fn running_calories(t: &Running, speed: f64) -> f64 {
    (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * t.weight_kg / M_IN_KM
        * t.duration_hours
        * MIN_IN_H
}

fn walking_calories(t: &SportsWalking, speed: f64) -> f64 {
    // Floor division of speed² by height is part of the formula, not a typo
    // for true division; it zeroes the term for any realistic walking pace.
    let speed_height = floor_div(speed.powi(2), t.height_cm);
    (walking::WEIGHT_MULTIPLIER * t.weight_kg
        + speed_height * walking::SPEED_HEIGHT_MULTIPLIER * t.weight_kg)
        * t.duration_hours
        * MIN_IN_H
}

fn swimming_calories(t: &Swimming, speed: f64) -> f64 {
    (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * t.weight_kg
}

/// Floored quotient computed from the remainder.
///
/// `(a / b).floor()` rounds the quotient before flooring, so `6084 / 5.2`
/// gives 1170 even though 5.2 does not fit 1170 times. Deriving the quotient
/// from `a % b` keeps it exact. A zero divisor yields NaN.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Build the summary message for a training.
///
/// Fails with [`WorkoutError::NonFiniteMetric`] when a metric cannot be
/// computed, which happens for a zero duration or a zero walking height.
pub fn show_training_info(training: &Training) -> Result<InfoMessage, WorkoutError> {
    let duration = finite("duration", training.duration_hours())?;
    let distance = finite("distance", distance(training))?;
    let speed = finite("speed", mean_speed(training))?;
    let calories = finite("calories", calories(training))?;

    Ok(InfoMessage {
        training_type: training.workout_type().to_string(),
        duration,
        distance,
        speed,
        calories,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::NonFiniteMetric { field })
    }
}

impl Training {
    /// Build the summary message for this training.
    pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        show_training_info(self)
    }
}
