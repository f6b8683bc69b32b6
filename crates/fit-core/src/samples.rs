//! Fixed sample sessions reported by the CLI.

use chrono::TimeDelta;

use crate::session::{SessionError, SessionRecord};
use crate::training::Training;
use crate::training_type::TrainingType;

/// Sample sessions as (type, actions, step length m, minutes, weight kg).
const SAMPLES: [(TrainingType, f64, f64, i64, f64); 3] = [
    (TrainingType::Running, 5000.0, 0.8, 30, 70.0),
    (TrainingType::Swimming, 5000.0, 0.8, 30, 70.0),
    (TrainingType::Walking, 3000.0, 0.8, 12, 70.0),
];

/// Returns the sample sessions in report order: running, swimming, walking.
pub fn sample_trainings() -> Result<Vec<Training>, SessionError> {
    SAMPLES
        .iter()
        .map(|&(training_type, actions, step_length, minutes, weight_kg)| {
            SessionRecord::new(
                training_type,
                actions,
                step_length,
                TimeDelta::minutes(minutes),
                weight_kg,
            )
            .map(Training::from)
        })
        .collect()
}
