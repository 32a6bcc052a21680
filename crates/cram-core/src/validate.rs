//! Structural validation of untrusted plan documents.
//!
//! Both the generation provider and imported files hand us arbitrary JSON.
//! [`validate`] checks it field by field and produces a [`PlanDraft`], a plan
//! whose tasks may still lack their local `completed` flag. Turning a draft
//! into a [`StudyPlan`] is the normalization step and belongs to the caller:
//!
//! - `StudyPlan::from(draft)` keeps flags that are present (import)
//! - [`PlanDraft::into_fresh_plan`] resets every flag to `false` (generation)

use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    models::{DailyPlan, StudyPlan, Task, WeeklyBreakdown},
};

type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// A structurally valid plan whose completion flags may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    pub title: String,
    pub weeks: Vec<WeekDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDraft {
    pub week_number: u32,
    pub theme: String,
    pub daily_tasks: Vec<DayDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDraft {
    pub label: String,
    pub tasks: Vec<TaskDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: Option<bool>,
}

impl PlanDraft {
    /// Normalizes a freshly generated plan: every task starts incomplete.
    pub fn into_fresh_plan(self) -> StudyPlan {
        self.into_plan(|_| false)
    }

    fn into_plan(self, completed: impl Fn(Option<bool>) -> bool + Copy) -> StudyPlan {
        StudyPlan {
            title: self.title,
            weeks: self
                .weeks
                .into_iter()
                .map(|week| WeeklyBreakdown {
                    week_number: week.week_number,
                    theme: week.theme,
                    daily_tasks: week
                        .daily_tasks
                        .into_iter()
                        .map(|day| DailyPlan {
                            label: day.label,
                            tasks: day
                                .tasks
                                .into_iter()
                                .map(|task| Task {
                                    title: task.title,
                                    description: task.description,
                                    completed: completed(task.completed),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<PlanDraft> for StudyPlan {
    /// Normalizes a draft, keeping completion flags that are present.
    fn from(draft: PlanDraft) -> Self {
        draft.into_plan(|completed| completed.unwrap_or(false))
    }
}

/// Validates an untrusted JSON value against the study plan shape.
///
/// # Errors
///
/// Returns `ValidationError::MalformedPlan` naming the path of the first
/// field that is missing or has the wrong type.
pub fn validate(candidate: &Value) -> ValidationResult<PlanDraft> {
    let root = as_object(candidate, "$")?;
    let title = required_string(root, "title", "title")?;
    let weeks = required_array(root, "weeks", "weeks")?
        .iter()
        .enumerate()
        .map(|(i, week)| validate_week(week, &format!("weeks[{i}]")))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(PlanDraft { title, weeks })
}

fn validate_week(value: &Value, path: &str) -> ValidationResult<WeekDraft> {
    let week = as_object(value, path)?;

    let number_path = format!("{path}.weekNumber");
    let week_number = match week.get("weekNumber") {
        None => return Err(ValidationError::malformed(number_path, "missing field")),
        Some(number) => number
            .as_u64()
            .filter(|n| *n >= 1)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ValidationError::malformed(number_path, "expected a positive integer"))?,
    };

    let theme = required_string(week, "theme", &format!("{path}.theme"))?;
    let daily_tasks = required_array(week, "dailyTasks", &format!("{path}.dailyTasks"))?
        .iter()
        .enumerate()
        .map(|(i, day)| validate_day(day, &format!("{path}.dailyTasks[{i}]")))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(WeekDraft {
        week_number,
        theme,
        daily_tasks,
    })
}

fn validate_day(value: &Value, path: &str) -> ValidationResult<DayDraft> {
    let day = as_object(value, path)?;
    let label = required_string(day, "label", &format!("{path}.label"))?;
    let tasks = required_array(day, "tasks", &format!("{path}.tasks"))?
        .iter()
        .enumerate()
        .map(|(i, task)| validate_task(task, &format!("{path}.tasks[{i}]")))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(DayDraft { label, tasks })
}

fn validate_task(value: &Value, path: &str) -> ValidationResult<TaskDraft> {
    let task = as_object(value, path)?;
    let title = required_non_empty(task, "title", &format!("{path}.title"))?;
    let description = required_non_empty(task, "description", &format!("{path}.description"))?;

    let completed = match task.get("completed") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            return Err(ValidationError::malformed(
                format!("{path}.completed"),
                "expected a boolean",
            ))
        }
    };

    Ok(TaskDraft {
        title,
        description,
        completed,
    })
}

fn as_object<'a>(value: &'a Value, path: &str) -> ValidationResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::malformed(path, "expected an object"))
}

fn required_string(object: &Map<String, Value>, key: &str, path: &str) -> ValidationResult<String> {
    match object.get(key) {
        None => Err(ValidationError::malformed(path, "missing field")),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::malformed(path, "expected a string")),
    }
}

fn required_non_empty(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> ValidationResult<String> {
    let text = required_string(object, key, path)?;
    if text.trim().is_empty() {
        return Err(ValidationError::malformed(path, "must not be empty"));
    }
    Ok(text)
}

fn required_array<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> ValidationResult<&'a Vec<Value>> {
    match object.get(key) {
        None => Err(ValidationError::malformed(path, "missing field")),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::malformed(path, "expected an array")),
    }
}
