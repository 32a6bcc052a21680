//! Data models for study plans and study requests.
//!
//! This module contains the core domain models of the study planner. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures separate from presentation logic.
//!
//! The plan models mirror the JSON document exchanged with the generation
//! provider and written by export (camelCase field names):
//!
//! ```text
//! StudyPlan { title, weeks }
//!   └─ WeeklyBreakdown { weekNumber, theme, dailyTasks }
//!        └─ DailyPlan { label, tasks }
//!             └─ Task { title, description, completed }
//! ```
//!
//! `completed` is local state: the provider never produces it and it is the
//! only field that changes while a plan is loaded.
//!
//! # Examples
//!
//! ```rust
//! use cram_core::models::{DailyPlan, PlanProgress, StudyPlan, Task, WeeklyBreakdown};
//!
//! let plan = StudyPlan {
//!     title: "Algebra Crash Course".to_string(),
//!     weeks: vec![WeeklyBreakdown {
//!         week_number: 1,
//!         theme: "Foundations".to_string(),
//!         daily_tasks: vec![DailyPlan {
//!             label: "Monday, Jan 1".to_string(),
//!             tasks: vec![Task {
//!                 title: "Review fractions".to_string(),
//!                 description: "Revisit fraction arithmetic.".to_string(),
//!                 completed: true,
//!             }],
//!         }],
//!     }],
//! };
//!
//! let progress = PlanProgress::from(&plan);
//! assert_eq!(progress.completed_tasks, 1);
//! assert_eq!(progress.percent(), 100);
//! ```

pub mod plan;
pub mod request;
pub mod summary;


pub use plan::{DailyPlan, StudyPlan, Task, TaskPosition, WeeklyBreakdown};
pub use request::{ComfortLevel, StudyRequest};
pub use summary::PlanProgress;
