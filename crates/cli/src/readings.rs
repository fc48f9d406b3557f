use std::{fs, path::Path};

use anyhow::Result;
use serde::Deserialize;

/// One raw reading as delivered by the sensor unit.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Reading {
    pub workout_type: String,
    pub data: Vec<f32>,
}

/// The recorded batch processed when no input file is given.
#[must_use]
pub fn sample_batch() -> Vec<Reading> {
    vec![
        Reading {
            workout_type: "SWM".to_string(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        Reading {
            workout_type: "RUN".to_string(),
            data: vec![15000.0, 1.0, 75.0],
        },
        Reading {
            workout_type: "WLK".to_string(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}

/// Read a batch of readings from a JSON file.
pub fn from_file(path: &Path) -> Result<Vec<Reading>> {
    let contents = fs::read_to_string(path)?;
    let readings = serde_json::from_str(&contents)?;
    Ok(readings)
}
