//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers format the outcome of a generation or a toggle with a short
//! confirmation line followed by the resulting plan.

use std::{fmt, path::Path};

use crate::models::{StudyPlan, TaskPosition};

/// Wrapper type for displaying a plan that was generated and saved.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
///
/// use cram_core::{display::SavedPlan, models::StudyPlan};
///
/// let plan = StudyPlan { title: "Biology".to_string(), weeks: vec![] };
/// let output = SavedPlan::new(&plan, Path::new("biology.json")).to_string();
/// assert!(output.starts_with("Saved plan to biology.json"));
/// ```
pub struct SavedPlan<'a> {
    pub plan: &'a StudyPlan,
    pub path: &'a Path,
}

impl<'a> SavedPlan<'a> {
    pub fn new(plan: &'a StudyPlan, path: &'a Path) -> Self {
        Self { plan, path }
    }
}

impl fmt::Display for SavedPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved plan to {}", self.path.display())?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// Wrapper type for displaying the result of a task toggle.
pub struct ToggleResult<'a> {
    pub plan: &'a StudyPlan,
    pub position: TaskPosition,
}

impl<'a> ToggleResult<'a> {
    pub fn new(plan: &'a StudyPlan, position: TaskPosition) -> Self {
        Self { plan, position }
    }
}

impl fmt::Display for ToggleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TaskPosition { week, day, task } = self.position;
        if let Some(toggled) = self.plan.task(self.position) {
            let state = if toggled.completed { "done" } else { "not done" };
            writeln!(
                f,
                "Marked task {}.{}.{} ({}) as {state}",
                week + 1,
                day + 1,
                task + 1,
                toggled.title
            )?;
            writeln!(f)?;
        }
        write!(f, "{}", self.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::create_test_plan;

    #[test]
    fn test_toggle_result_display() {
        let plan = create_test_plan();
        let output = ToggleResult::new(&plan, TaskPosition::new(0, 0, 1)).to_string();
        assert!(output.starts_with("Marked task 1.1.2 (Nomenclature drills) as done\n"));
        assert!(output.contains("# Organic Chemistry Sprint"));
    }

    #[test]
    fn test_saved_plan_display() {
        let plan = create_test_plan();
        let output = SavedPlan::new(&plan, Path::new("/tmp/sprint.json")).to_string();
        assert!(output.starts_with("Saved plan to /tmp/sprint.json\n\n# Organic Chemistry Sprint"));
    }
}
