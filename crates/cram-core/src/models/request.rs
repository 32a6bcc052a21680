//! Study request and comfort level definitions.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How familiar the learner already is with the material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ComfortLevel {
    /// New to the material; start with fundamentals
    Beginner,

    /// Knows some basics; balance review with new material
    #[default]
    Intermediate,

    /// Needs a refresher; focus on complex topics and review
    Advanced,
}

impl FromStr for ComfortLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ComfortLevel::Beginner),
            "intermediate" => Ok(ComfortLevel::Intermediate),
            "advanced" => Ok(ComfortLevel::Advanced),
            _ => Err(format!("Invalid comfort level: {s}")),
        }
    }
}

impl ComfortLevel {
    /// Name embedded verbatim in the generation prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortLevel::Beginner => "Beginner",
            ComfortLevel::Intermediate => "Intermediate",
            ComfortLevel::Advanced => "Advanced",
        }
    }
}

/// A validated request for one generation attempt.
///
/// Only constructed through [`crate::params::StudyForm::validate`], so
/// `topics` is non-empty and `test_date` lies strictly after the date the
/// form was validated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRequest {
    pub(crate) topics: String,
    pub(crate) test_date: Date,
    pub(crate) comfort_level: ComfortLevel,
}

impl StudyRequest {
    /// Free-text topics, exactly as the user wrote them
    pub fn topics(&self) -> &str {
        &self.topics
    }

    /// Date of the test
    pub fn test_date(&self) -> Date {
        self.test_date
    }

    /// Comfort level with the material
    pub fn comfort_level(&self) -> ComfortLevel {
        self.comfort_level
    }
}
