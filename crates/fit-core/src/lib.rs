//! Core domain logic for the fitness tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Sessions: validated raw measurements and the distance/speed derived from them
//! - Calories: one formula per training type
//! - Reports: the result record printed for each session

pub mod calories;
pub mod report;
pub mod samples;
pub mod session;
pub mod training;
pub mod training_type;

pub use report::{ResultRecord, build_report};
pub use samples::sample_trainings;
pub use session::{Kinematics, SessionError, SessionRecord};
pub use training::{CaloriesCalculator, Running, Swimming, Training, Walking};
pub use training_type::TrainingType;
