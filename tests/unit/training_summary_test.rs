//! Unit tests for training summaries.
//!
//! Reference trainings with known distance, speed and calorie values.

use fitness_tracker::metrics::calculator::{calories, distance, mean_speed};
use fitness_tracker::read_package;

const EPSILON: f64 = 1e-9;

#[test]
fn test_running_summary() {
    let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert!((distance(&training) - 9.75).abs() < EPSILON);
    assert!((mean_speed(&training) - 9.75).abs() < EPSILON);
    assert!((calories(&training) - 699.75).abs() < EPSILON);

    let message = training.show_training_info().unwrap();
    assert_eq!(
        message.render(),
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 699.750."
    );
}

#[test]
fn test_swimming_summary() {
    let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let message = training.show_training_info().unwrap();

    assert_eq!(
        message.render(),
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn test_walking_summary() {
    let training = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let message = training.show_training_info().unwrap();

    assert_eq!(
        message.render(),
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 157.500."
    );
}

#[test]
fn test_swimming_speed_ignores_strokes() {
    let few = read_package("SWM", &[100.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let many = read_package("SWM", &[2000.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    assert_eq!(mean_speed(&few), mean_speed(&many));
    assert_eq!(calories(&few), calories(&many));
    assert!(distance(&few) < distance(&many));
}

#[test]
fn test_summary_is_deterministic() {
    let readings = [9000.0, 1.5, 82.5, 175.0];
    let first = read_package("WLK", &readings)
        .unwrap()
        .show_training_info()
        .unwrap()
        .render();
    let second = read_package("WLK", &readings)
        .unwrap()
        .show_training_info()
        .unwrap()
        .render();

    assert_eq!(first, second);
}

#[test]
fn test_walking_floor_division_near_whole_quotient() {
    // 78² / 5.2 rounds to 1170 in float division; the floored quotient is 1169
    let training = read_package("WLK", &[12000.0, 0.1, 75.0, 5.2]).unwrap();
    assert!((calories(&training) - 15271.2).abs() < 1e-6);
}
