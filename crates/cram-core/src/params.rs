//! Parameter structures for study planner operations
//!
//! These structures carry raw user input across interfaces (CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! wrappers and convert into these types via `From`, keeping clap out of the
//! core crate:
//!
//! ```text
//! CLI Args (clap) → StudyForm → validate(today) → StudyRequest → generation
//! ```

use jiff::civil::Date;

use crate::{
    error::{PlannerError, Result},
    models::{ComfortLevel, StudyRequest},
};

/// Raw, unvalidated input collected from the user.
#[derive(Debug, Clone, Default)]
pub struct StudyForm {
    /// Free-text topics; must contain something besides whitespace
    pub topics: String,
    /// Test date in `YYYY-MM-DD` form
    pub test_date: String,
    /// Comfort level with the material
    pub comfort_level: ComfortLevel,
}

impl StudyForm {
    /// Validates the form against the current date.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the topics are blank, the test
    /// date cannot be parsed, or the test date is not strictly after `today`.
    pub fn validate(&self, today: Date) -> Result<StudyRequest> {
        if self.topics.trim().is_empty() {
            return Err(PlannerError::invalid_input("topics")
                .with_reason("Please enter the test topics."));
        }

        let test_date: Date = self.test_date.trim().parse().map_err(|e| {
            PlannerError::invalid_input("test_date")
                .with_reason(format!("'{}' is not a valid date: {e}", self.test_date))
        })?;

        if test_date <= today {
            return Err(PlannerError::invalid_input("test_date")
                .with_reason("Please select a future date for the test."));
        }

        Ok(StudyRequest {
            topics: self.topics.clone(),
            test_date,
            comfort_level: self.comfort_level,
        })
    }
}
