//! Progress statistics for plans and weeks.

use serde::{Deserialize, Serialize};

use super::{StudyPlan, Task, WeeklyBreakdown};

/// Completion counts for a set of tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlanProgress {
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
}

impl PlanProgress {
    fn from_tasks<'a>(tasks: impl Iterator<Item = &'a Task>) -> Self {
        tasks.fold(Self::default(), |mut acc, task| {
            acc.total_tasks += 1;
            if task.completed {
                acc.completed_tasks += 1;
            }
            acc
        })
    }

    /// Number of tasks not yet completed
    pub fn pending_tasks(&self) -> u32 {
        self.total_tasks - self.completed_tasks
    }

    /// Completion percentage, 0 when there are no tasks.
    pub fn percent(&self) -> u32 {
        if self.total_tasks == 0 {
            0
        } else {
            self.completed_tasks * 100 / self.total_tasks
        }
    }
}

impl From<&WeeklyBreakdown> for PlanProgress {
    fn from(week: &WeeklyBreakdown) -> Self {
        Self::from_tasks(week.tasks())
    }
}

impl From<&StudyPlan> for PlanProgress {
    fn from(plan: &StudyPlan) -> Self {
        Self::from_tasks(plan.tasks())
    }
}
