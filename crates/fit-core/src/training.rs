//! Training variants and the calorie calculator capability.

use chrono::TimeDelta;

use crate::calories::{running_calories, swimming_calories, walking_calories};
use crate::report::{ResultRecord, build_report};
use crate::session::{SessionError, SessionRecord};
use crate::training_type::TrainingType;

/// Anything that can compute calories for a session and report on it.
pub trait CaloriesCalculator {
    /// The session this calculator reports on.
    fn session(&self) -> &SessionRecord;

    fn calories(&self) -> f64;

    /// Builds the full result record for the session.
    fn report(&self) -> ResultRecord {
        build_report(*self.session())
    }
}

/// Generates a training variant wrapping a session of a fixed type.
macro_rules! define_training {
    (
        $(#[$meta:meta])*
        $name:ident, $training_type:expr, |$session:ident| $calories:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name(SessionRecord);

        impl $name {
            /// Creates the variant from raw measurements.
            pub fn new(
                action_count: f64,
                step_length: f64,
                duration: TimeDelta,
                weight_kg: f64,
            ) -> Result<Self, SessionError> {
                SessionRecord::new($training_type, action_count, step_length, duration, weight_kg)
                    .map(Self)
            }
        }

        impl CaloriesCalculator for $name {
            fn session(&self) -> &SessionRecord {
                &self.0
            }

            fn calories(&self) -> f64 {
                let $session = &self.0;
                $calories
            }
        }
    };
}

define_training!(
    /// A running session.
    Running,
    TrainingType::Running,
    |session| running_calories(session, &session.kinematics())
);

define_training!(
    /// A walking session.
    Walking,
    TrainingType::Walking,
    |session| walking_calories(session, &session.kinematics())
);

define_training!(
    /// A swimming session. Calories depend on body weight only.
    Swimming,
    TrainingType::Swimming,
    |session| swimming_calories(session)
);

/// Any training variant, dispatched by type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl From<SessionRecord> for Training {
    fn from(session: SessionRecord) -> Self {
        match session.training_type() {
            TrainingType::Running => Self::Running(Running(session)),
            TrainingType::Walking => Self::Walking(Walking(session)),
            TrainingType::Swimming => Self::Swimming(Swimming(session)),
        }
    }
}

impl Training {
    pub const fn training_type(&self) -> TrainingType {
        match self {
            Self::Running(_) => TrainingType::Running,
            Self::Walking(_) => TrainingType::Walking,
            Self::Swimming(_) => TrainingType::Swimming,
        }
    }

    fn as_calculator(&self) -> &dyn CaloriesCalculator {
        match self {
            Self::Running(running) => running,
            Self::Walking(walking) => walking,
            Self::Swimming(swimming) => swimming,
        }
    }
}

impl CaloriesCalculator for Training {
    fn session(&self) -> &SessionRecord {
        self.as_calculator().session()
    }

    fn calories(&self) -> f64 {
        self.as_calculator().calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_variant_constructor_tags_session() {
        let walking = Walking::new(3000.0, 0.8, TimeDelta::minutes(12), 70.0).unwrap();
        assert_eq!(walking.session().training_type(), TrainingType::Walking);
    }

    #[test]
    fn test_variant_constructor_validates() {
        let result = Running::new(5000.0, 0.8, TimeDelta::zero(), 70.0);
        assert!(matches!(
            result,
            Err(SessionError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_training_from_session_picks_variant() {
        let session =
            SessionRecord::new(TrainingType::Swimming, 10.0, 1.0, TimeDelta::minutes(5), 60.0)
                .unwrap();
        let training = Training::from(session);

        assert!(matches!(training, Training::Swimming(_)));
        assert_eq!(training.training_type(), TrainingType::Swimming);
        assert_eq!(*training.session(), session);
    }

    #[test]
    fn test_enum_dispatch_matches_variant() {
        let running = Running::new(5000.0, 0.8, TimeDelta::minutes(30), 70.0).unwrap();
        let training = Training::from(*running.session());

        assert_relative_eq!(training.calories(), running.calories());
        assert_eq!(training.report(), running.report());
    }

    #[test]
    fn test_report_fields() {
        let running = Running::new(5000.0, 0.8, TimeDelta::minutes(30), 70.0).unwrap();
        let report = running.report();

        assert_eq!(report.training_type, TrainingType::Running);
        assert_relative_eq!(report.distance_km, 40.0);
        assert_relative_eq!(report.mean_speed_km_per_min, 40.0 / 30.0);
        assert_relative_eq!(report.calories, running.calories());
    }
}
