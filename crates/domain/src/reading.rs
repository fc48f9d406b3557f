use log::debug;
use thiserror::Error;

use crate::workout::Workout;

const RUNNING_VALUES: usize = 3;
const WALKING_VALUES: usize = 4;
const SWIMMING_VALUES: usize = 5;

impl Workout {
    /// Build a workout from a raw sensor reading.
    ///
    /// `data` is positional: action count, duration in hours and weight in
    /// kg, followed by the height in cm for `WLK` and the pool length in m
    /// plus the lap count for `SWM`.
    pub fn from_reading(workout_type: &str, data: &[f32]) -> Result<Self, ReadingError> {
        let workout = match workout_type {
            "RUN" => {
                check_values(workout_type, RUNNING_VALUES, data)?;
                Workout::Running {
                    action: to_count(data[0]),
                    duration: data[1],
                    weight: data[2],
                }
            }
            "WLK" => {
                check_values(workout_type, WALKING_VALUES, data)?;
                Workout::SportsWalking {
                    action: to_count(data[0]),
                    duration: data[1],
                    weight: data[2],
                    height: data[3],
                }
            }
            "SWM" => {
                check_values(workout_type, SWIMMING_VALUES, data)?;
                Workout::Swimming {
                    action: to_count(data[0]),
                    duration: data[1],
                    weight: data[2],
                    pool_length: data[3],
                    pool_count: to_count(data[4]),
                }
            }
            _ => return Err(ReadingError::UnknownWorkoutType(workout_type.to_string())),
        };

        debug!("read {} workout from {} values", workout.kind(), data.len());

        Ok(workout)
    }
}

fn check_values(workout_type: &str, expected: usize, data: &[f32]) -> Result<(), ReadingError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(ReadingError::WrongValueCount {
            workout_type: workout_type.to_string(),
            expected,
            actual: data.len(),
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f32) -> u32 {
    value as u32
}

#[derive(Error, Debug, PartialEq)]
pub enum ReadingError {
    #[error("Unknown workout type `{0}`")]
    UnknownWorkoutType(String),
    #[error("Workout type `{workout_type}` takes {expected} values ({actual} given)")]
    WrongValueCount {
        workout_type: String,
        expected: usize,
        actual: usize,
    },
}
