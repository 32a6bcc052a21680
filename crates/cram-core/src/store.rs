//! In-memory holder of the current study plan.

use log::debug;

use crate::models::{StudyPlan, TaskPosition};

/// Holds the active plan, if any.
///
/// The plan structure is read-only while it is installed: the only mutation
/// is [`PlanStore::toggle_task`], which flips exactly one completion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStore {
    current: Option<StudyPlan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed plan.
    pub fn current(&self) -> Option<&StudyPlan> {
        self.current.as_ref()
    }

    /// Replaces the current plan wholesale.
    ///
    /// Accepts a normalized [`StudyPlan`] or anything that normalizes into
    /// one, such as a validated [`crate::validate::PlanDraft`] whose missing
    /// completion flags default to `false`.
    pub fn install(&mut self, plan: impl Into<StudyPlan>) -> &StudyPlan {
        self.current.insert(plan.into())
    }

    /// Flips the completion flag of the task at `position`.
    ///
    /// Returns `false` and leaves everything untouched when no plan is
    /// installed or the position does not exist.
    pub fn toggle_task(&mut self, position: TaskPosition) -> bool {
        match self.current.as_mut().and_then(|plan| plan.task_mut(position)) {
            Some(task) => {
                task.completed = !task.completed;
                debug!("Toggled task {position:?} to completed={}", task.completed);
                true
            }
            None => {
                debug!("Ignoring toggle of missing task {position:?}");
                false
            }
        }
    }

    /// Drops the current plan.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
