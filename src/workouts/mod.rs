//! Workout module for sensor packages and training types.

pub mod reader;
pub mod session;
pub mod types;

pub use reader::read_package;
pub use session::{process_package, run_packages, PackageOutcome, SensorPackage};
pub use types::{Running, SportsWalking, Swimming, Training, WorkoutError, WorkoutType};
