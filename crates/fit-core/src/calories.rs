//! Calorie formulas, one per training type.
//!
//! Each formula keeps its own constant set. Several constants share a name
//! and value across types but play different roles in each formula, so
//! they are deliberately not merged.

use crate::session::{Kinematics, M_IN_KM, SessionRecord};
use crate::training_type::TrainingType;

/// Multiplier applied to per-minute speed and to durations in hours.
pub const MIN_IN_HOURS: f64 = 40.0;

pub mod running {
    /// Weight of speed in km/h.
    pub const MEAN_SPEED_MULTIPLIER: f64 = 0.5;
    /// Offset added to the weighted speed.
    pub const MEAN_SPEED_SHIFT: f64 = 0.6;
}

pub mod walking {
    /// Weight of body mass in the base term.
    pub const MEAN_SPEED_MULTIPLIER: f64 = 0.5;
    /// Athlete height in metres.
    pub const HEIGHT_M: f64 = 1.82;
    /// Weight of the speed over height term.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.5;
}

pub mod swimming {
    /// Pool length in metres.
    pub const POOL_LENGTH_M: f64 = 30.0;
    /// Laps swum.
    pub const POOL_LAP_COUNT: f64 = 6.0;
    /// Divisor turning pool distance into speed.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.5;
    /// Offset added to the pool speed.
    pub const MEAN_SPEED_SHIFT: f64 = 0.6;
    /// Weight of body mass.
    pub const WEIGHT_MULTIPLIER: f64 = 0.5;
}

fn speed_km_per_hour(kinematics: &Kinematics) -> f64 {
    kinematics.mean_speed_km_per_min * MIN_IN_HOURS
}

/// `(0.5 * v + 0.6) * weight / 100 * hours * 40`
pub fn running_calories(session: &SessionRecord, kinematics: &Kinematics) -> f64 {
    use running::{MEAN_SPEED_MULTIPLIER, MEAN_SPEED_SHIFT};

    let speed = speed_km_per_hour(kinematics);
    (MEAN_SPEED_MULTIPLIER * speed + MEAN_SPEED_SHIFT) * session.weight_kg() / M_IN_KM
        * session.duration_hours()
        * MIN_IN_HOURS
}

/// `(0.5 * weight + (v / height) * 0.5 * weight) * hours * 40`
pub fn walking_calories(session: &SessionRecord, kinematics: &Kinematics) -> f64 {
    use walking::{HEIGHT_M, MEAN_SPEED_MULTIPLIER, SPEED_HEIGHT_MULTIPLIER};

    let speed = speed_km_per_hour(kinematics);
    let weight = session.weight_kg();
    (MEAN_SPEED_MULTIPLIER * weight + (speed / HEIGHT_M) * SPEED_HEIGHT_MULTIPLIER * weight)
        * session.duration_hours()
        * MIN_IN_HOURS
}

/// Swimming calories from the fixed pool geometry and body weight.
///
/// Duration, action count and stroke length do not enter the formula.
pub fn swimming_calories(session: &SessionRecord) -> f64 {
    use swimming::{
        MEAN_SPEED_SHIFT, POOL_LAP_COUNT, POOL_LENGTH_M, SPEED_HEIGHT_MULTIPLIER,
        WEIGHT_MULTIPLIER,
    };

    let pool_speed = POOL_LENGTH_M * POOL_LAP_COUNT / M_IN_KM / SPEED_HEIGHT_MULTIPLIER;
    (pool_speed + MEAN_SPEED_SHIFT) * WEIGHT_MULTIPLIER * session.weight_kg() * MIN_IN_HOURS
}

/// Dispatches to the formula matching the session's training type.
pub fn calories_for(session: &SessionRecord, kinematics: &Kinematics) -> f64 {
    match session.training_type() {
        TrainingType::Running => running_calories(session, kinematics),
        TrainingType::Walking => walking_calories(session, kinematics),
        TrainingType::Swimming => swimming_calories(session),
    }
}
