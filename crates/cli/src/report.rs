use std::io::{self, Write};

use motus_domain::Workout;

/// Write the summary line for a workout to `out`.
pub fn emit(out: &mut impl Write, workout: &Workout) -> io::Result<()> {
    writeln!(out, "{}", workout.summary())
}
