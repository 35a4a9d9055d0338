//! Unit tests for the sensor package reader.

use fitness_tracker::workouts::types::{Training, WorkoutError, WorkoutType};
use fitness_tracker::read_package;

#[test]
fn test_each_code_builds_its_variant() {
    let cases: [(&str, &[f64], WorkoutType); 3] = [
        ("RUN", &[15000.0, 1.0, 75.0], WorkoutType::Running),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0], WorkoutType::SportsWalking),
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutType::Swimming),
    ];

    for (code, readings, expected) in cases {
        let training = read_package(code, readings).unwrap();
        assert_eq!(training.workout_type(), expected);
    }
}

#[test]
fn test_unknown_workout_type() {
    assert_eq!(
        read_package("WRK", &[9000.0, 1.0, 75.0, 180.0]),
        Err(WorkoutError::UnknownWorkoutType("WRK".to_string()))
    );
}

#[test]
fn test_missing_reading_is_not_padded() {
    assert_eq!(
        read_package("WLK", &[1.0, 75.0, 180.0]),
        Err(WorkoutError::ParameterArity {
            workout: WorkoutType::SportsWalking,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn test_swimming_arity() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Swimming expects 5 readings, got 4"
    );
}

#[test]
fn test_walking_height_is_kept() {
    match read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap() {
        Training::SportsWalking(walk) => assert_eq!(walk.height_cm, 180.0),
        other => panic!("Expected walking, got {:?}", other),
    }
}
