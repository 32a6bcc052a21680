//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types add context for specific operations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │    Markdown     │
//! │  (StudyPlan)    │───▶│ & Status Lines  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown so the CLI can render it richly with termimad or
//! print it as plain text.

pub mod models;
pub mod results;
pub mod status;

pub use results::{SavedPlan, ToggleResult};
pub use status::TransitionStatus;
