//! Core library for the Cram study planner.
//!
//! This crate turns a few study parameters (topics, test date, comfort level)
//! into a structured multi-week study plan produced by a generative model, and
//! keeps that plan as a locally-stateful checklist.
//!
//! # Components
//!
//! - [`validate`] and [`schema`]: the canonical plan shape and the validator
//!   for untrusted documents
//! - [`generator`]: prompt construction and the provider call
//! - [`lifecycle`]: the single-flight request state machine
//! - [`store`]: the current plan and task toggling
//! - [`transfer`]: export and import of plan files
//! - [`session`]: async glue between the controller and a generator
//! - [`display`]: markdown formatting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cram_core::{params::StudyForm, GeneratorBuilder, Session, Transition};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().build()?;
//! let mut session = Session::new(generator);
//!
//! let form = StudyForm {
//!     topics: "Organic Chemistry".to_string(),
//!     test_date: "2030-06-01".to_string(),
//!     ..Default::default()
//! };
//! let today = jiff::Zoned::now().date();
//!
//! let transition = session
//!     .generate(&form, today, std::future::pending())
//!     .await?;
//! if transition == Transition::Succeeded {
//!     if let Some(plan) = session.controller().plan() {
//!         println!("{plan}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod provider;
pub mod schema;
pub mod session;
pub mod store;
pub mod transfer;
pub mod validate;

// Re-export commonly used types
pub use error::{ImportError, PlannerError, Result, ValidationError};
pub use generator::{GeneratorBuilder, PlanGenerator};
pub use lifecycle::{RequestController, RequestId, RequestState, Ticket, Transition};
pub use models::{
    ComfortLevel, DailyPlan, PlanProgress, StudyPlan, StudyRequest, Task, TaskPosition,
    WeeklyBreakdown,
};
pub use params::StudyForm;
pub use provider::{GenerationProvider, ProviderError};
pub use session::Session;
pub use store::PlanStore;
pub use transfer::{export_bytes, export_file_name, import_bytes, import_topics};
