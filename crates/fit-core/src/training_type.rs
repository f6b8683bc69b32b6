//! Exercise kinds, each with its own calorie formula.

use std::fmt;

use serde::Serialize;

/// Exercise kind a session is tagged with.
///
/// Serializes as its report label (`"Running"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrainingType {
    Running,
    Walking,
    Swimming,
}

impl TrainingType {
    /// Label printed in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
