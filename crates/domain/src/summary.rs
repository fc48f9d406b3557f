use std::fmt;

use crate::workout::WorkoutKind;

/// Read-only snapshot of the statistics of a single workout.
///
/// Duration is in hours, distance in km, speed in km/h and calories in kcal.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub kind: WorkoutKind,
    pub duration: f32,
    pub distance: f32,
    pub speed: f32,
    pub calories: f32,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.kind, self.duration, self.distance, self.speed, self.calories
        )
    }
}
