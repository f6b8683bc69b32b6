//! Result records derived from sessions.

use serde::Serialize;

use crate::calories::calories_for;
use crate::session::SessionRecord;
use crate::training_type::TrainingType;

/// Printable summary of one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRecord {
    pub training_type: TrainingType,
    pub distance_km: f64,
    pub mean_speed_km_per_min: f64,
    pub calories: f64,
}

/// Builds the result record for a session.
///
/// Kinematics are computed once and shared with the calorie formula.
pub fn build_report(session: SessionRecord) -> ResultRecord {
    let kinematics = session.kinematics();
    let calories = calories_for(&session, &kinematics);

    tracing::debug!(
        training_type = %session.training_type(),
        distance_km = kinematics.distance_km,
        calories,
        "built report"
    );

    ResultRecord {
        training_type: session.training_type(),
        distance_km: kinematics.distance_km,
        mean_speed_km_per_min: kinematics.mean_speed_km_per_min,
        calories,
    }
}
