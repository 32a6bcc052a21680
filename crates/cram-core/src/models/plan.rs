//! Study plan model definitions.

use serde::{Deserialize, Serialize};

/// A single actionable study task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Short, actionable task title
    pub title: String,

    /// One-sentence description of the task
    pub description: String,

    /// Local-only completion flag, never produced by the generation source
    #[serde(default)]
    pub completed: bool,
}

/// The tasks scheduled for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Day identifier, ideally a calendar date such as "Monday, October 28"
    pub label: String,

    /// Ordered tasks for the day; empty on rest days
    pub tasks: Vec<Task>,
}

/// One week of the plan with its theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBreakdown {
    /// Week number, starting from 1
    pub week_number: u32,

    /// Main focus of the week
    pub theme: String,

    /// Ordered daily plans
    pub daily_tasks: Vec<DailyPlan>,
}

/// Root aggregate describing a multi-week study schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// Title of the plan
    pub title: String,

    /// Ordered weekly breakdowns
    pub weeks: Vec<WeeklyBreakdown>,
}

/// Zero-based address of one task inside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskPosition {
    pub week: usize,
    pub day: usize,
    pub task: usize,
}

impl TaskPosition {
    pub fn new(week: usize, day: usize, task: usize) -> Self {
        Self { week, day, task }
    }

    /// Builds a position from one-based indices as shown to users.
    ///
    /// Returns `None` when any index is zero.
    pub fn from_one_based(week: usize, day: usize, task: usize) -> Option<Self> {
        Some(Self {
            week: week.checked_sub(1)?,
            day: day.checked_sub(1)?,
            task: task.checked_sub(1)?,
        })
    }
}

impl StudyPlan {
    /// Looks up a task by position.
    pub fn task(&self, position: TaskPosition) -> Option<&Task> {
        self.weeks
            .get(position.week)?
            .daily_tasks
            .get(position.day)?
            .tasks
            .get(position.task)
    }

    /// Mutable access to exactly the task at `position`, if it exists.
    pub(crate) fn task_mut(&mut self, position: TaskPosition) -> Option<&mut Task> {
        self.weeks
            .get_mut(position.week)?
            .daily_tasks
            .get_mut(position.day)?
            .tasks
            .get_mut(position.task)
    }

    /// Iterates over every task in document order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.weeks.iter().flat_map(WeeklyBreakdown::tasks)
    }
}

impl WeeklyBreakdown {
    /// Iterates over every task of the week in day order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.daily_tasks.iter().flat_map(|day| day.tasks.iter())
    }
}
