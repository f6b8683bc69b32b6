//! Session records and the base kinematics shared by every training type.

use chrono::TimeDelta;
use thiserror::Error;

use crate::training_type::TrainingType;

/// Metres per distance unit used for every training type.
///
/// This is 100, not 1000: reported distances are in units of 100 m while
/// being labelled km. Kept as-is so reports stay comparable.
pub const M_IN_KM: f64 = 100.0;

const SECONDS_IN_MINUTE: f64 = 60.0;
const SECONDS_IN_HOUR: f64 = 3_600.0;

/// Validation errors for session records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Duration was zero or negative, which leaves mean speed undefined.
    #[error("duration must be positive, got {millis} ms")]
    NonPositiveDuration { millis: i64 },

    /// A measured quantity was below zero.
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A measured quantity was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Distance over duration does not fit in an `f64`.
    #[error("mean speed overflows for {distance_km} km over {minutes} min")]
    SpeedOverflow { distance_km: f64, minutes: f64 },
}

/// Raw measurements for one exercise session.
///
/// Fields are private so a record can only exist with a positive duration,
/// finite non-negative measurements and a finite mean speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRecord {
    training_type: TrainingType,
    action_count: f64,
    step_length: f64,
    duration: TimeDelta,
    weight_kg: f64,
}

/// Distance and mean speed derived from a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub distance_km: f64,
    pub mean_speed_km_per_min: f64,
}

fn check_measure(field: &'static str, value: f64) -> Result<f64, SessionError> {
    if !value.is_finite() {
        return Err(SessionError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(SessionError::Negative { field, value });
    }
    Ok(value)
}

impl SessionRecord {
    /// Creates a new session record after validation.
    pub fn new(
        training_type: TrainingType,
        action_count: f64,
        step_length: f64,
        duration: TimeDelta,
        weight_kg: f64,
    ) -> Result<Self, SessionError> {
        if duration <= TimeDelta::zero() {
            return Err(SessionError::NonPositiveDuration {
                millis: duration.num_milliseconds(),
            });
        }

        let record = Self {
            training_type,
            action_count: check_measure("action_count", action_count)?,
            step_length: check_measure("step_length", step_length)?,
            duration,
            weight_kg: check_measure("weight_kg", weight_kg)?,
        };

        let minutes = record.duration_minutes();
        if minutes <= 0.0 {
            return Err(SessionError::NonPositiveDuration {
                millis: duration.num_milliseconds(),
            });
        }
        if !record.mean_speed().is_finite() {
            return Err(SessionError::SpeedOverflow {
                distance_km: record.distance(),
                minutes,
            });
        }

        Ok(record)
    }

    pub const fn training_type(&self) -> TrainingType {
        self.training_type
    }

    /// Steps or strokes performed.
    pub const fn action_count(&self) -> f64 {
        self.action_count
    }

    /// Metres covered per action.
    pub const fn step_length(&self) -> f64 {
        self.step_length
    }

    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Elapsed time in fractional minutes, at nanosecond precision.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_seconds_f64() / SECONDS_IN_MINUTE
    }

    /// Elapsed time in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration.as_seconds_f64() / SECONDS_IN_HOUR
    }

    pub fn distance(&self) -> f64 {
        self.action_count * self.step_length / M_IN_KM
    }

    /// Distance per minute of elapsed time.
    ///
    /// Always finite: construction rejects durations and measurements that
    /// would make it undefined.
    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration_minutes()
    }

    pub fn kinematics(&self) -> Kinematics {
        let distance_km = self.distance();
        Kinematics {
            distance_km,
            mean_speed_km_per_min: distance_km / self.duration_minutes(),
        }
    }
}
