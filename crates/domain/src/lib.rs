#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod reading;
pub mod summary;
pub mod workout;

pub use reading::ReadingError;
pub use summary::TrainingSummary;
pub use workout::{Workout, WorkoutKind};
