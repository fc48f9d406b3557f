use strum::Display;

use crate::summary::TrainingSummary;

/// Kind of a recorded workout.
///
/// The `Display` rendering is the label used in training summaries.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

/// A single recorded workout, built from one sensor reading.
///
/// `action` is the number of motion units (steps or strokes), `duration` is
/// in hours and `weight` in kg. The extra SportsWalking field is the height
/// in cm; Swimming carries the pool length in m and the number of laps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration: f32,
        weight: f32,
    },
    SportsWalking {
        action: u32,
        duration: f32,
        weight: f32,
        height: f32,
    },
    Swimming {
        action: u32,
        duration: f32,
        weight: f32,
        pool_length: f32,
        pool_count: u32,
    },
}

impl Workout {
    pub const METERS_PER_KM: f32 = 1000.0;
    pub const MINUTES_PER_HOUR: f32 = 60.0;
    /// Distance covered by one step.
    pub const STEP_LENGTH: f32 = 0.65;
    /// Distance covered by one stroke.
    pub const STROKE_LENGTH: f32 = 1.38;

    const RUNNING_SPEED_FACTOR: f32 = 18.0;
    const RUNNING_SPEED_OFFSET: f32 = 20.0;
    const WALKING_WEIGHT_FACTOR: f32 = 0.035;
    const WALKING_SPEED_FACTOR: f32 = 0.029;
    const SWIMMING_SPEED_OFFSET: f32 = 1.1;
    const SWIMMING_WEIGHT_FACTOR: f32 = 2.0;

    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Distance covered during the workout in km.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance_km(&self) -> f32 {
        self.action() as f32 * self.action_length() / Self::METERS_PER_KM
    }

    /// Mean speed during the workout in km/h.
    ///
    /// For Swimming the pool dimensions are used instead of the stroke-based
    /// distance, as laps are a direct distance measure.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_speed_kmh(&self) -> f32 {
        match self {
            Workout::Running { duration, .. } | Workout::SportsWalking { duration, .. } => {
                self.distance_km() / duration
            }
            Workout::Swimming {
                duration,
                pool_length,
                pool_count,
                ..
            } => pool_length * *pool_count as f32 / Self::METERS_PER_KM / duration,
        }
    }

    /// Energy spent during the workout in kcal.
    #[must_use]
    pub fn spent_calories(&self) -> f32 {
        match self {
            Workout::Running {
                duration, weight, ..
            } => {
                (Self::RUNNING_SPEED_FACTOR * self.mean_speed_kmh() - Self::RUNNING_SPEED_OFFSET)
                    * weight
                    / Self::METERS_PER_KM
                    * duration
                    * Self::MINUTES_PER_HOUR
            }
            Workout::SportsWalking {
                duration,
                weight,
                height,
                ..
            } => {
                let speed = self.mean_speed_kmh();
                // The speed²/height ratio is truncated to whole units, as in
                // the reference readings.
                (Self::WALKING_WEIGHT_FACTOR * weight
                    + (speed * speed / height).floor() * Self::WALKING_SPEED_FACTOR * weight)
                    * duration
                    * Self::MINUTES_PER_HOUR
            }
            Workout::Swimming { weight, .. } => {
                (self.mean_speed_kmh() + Self::SWIMMING_SPEED_OFFSET)
                    * Self::SWIMMING_WEIGHT_FACTOR
                    * weight
            }
        }
    }

    /// Read-only snapshot of the workout statistics for reporting.
    #[must_use]
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            kind: self.kind(),
            duration: self.duration(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }

    fn action(&self) -> u32 {
        match self {
            Workout::Running { action, .. }
            | Workout::SportsWalking { action, .. }
            | Workout::Swimming { action, .. } => *action,
        }
    }

    fn duration(&self) -> f32 {
        match self {
            Workout::Running { duration, .. }
            | Workout::SportsWalking { duration, .. }
            | Workout::Swimming { duration, .. } => *duration,
        }
    }

    fn action_length(&self) -> f32 {
        match self {
            Workout::Running { .. } | Workout::SportsWalking { .. } => Self::STEP_LENGTH,
            Workout::Swimming { .. } => Self::STROKE_LENGTH,
        }
    }
}
