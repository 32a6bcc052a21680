//! Plan generation client.
//!
//! [`PlanGenerator`] turns a validated [`StudyRequest`] into a [`StudyPlan`]
//! through one call to a [`GenerationProvider`]:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ build_prompt │───▶│   provider   │───▶│  parse JSON  │───▶│   validate   │
//! │   (prompt)   │    │ (+ schema)   │    │ (fence strip)│    │ + normalize  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Every failure along the way collapses into
//! [`PlannerError::GenerationFailed`] with one user-facing message; the cause
//! is only logged. Cancellation through the supplied token yields
//! [`PlannerError::Cancelled`] instead, even when the provider call completes
//! after the token fired.
//!
//! # Example
//!
//! ```rust,no_run
//! use cram_core::{GeneratorBuilder, params::StudyForm};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeneratorBuilder::new().with_api_key(Some("key")).build()?;
//! let today = jiff::Zoned::now().date();
//! let request = StudyForm {
//!     topics: "European History".to_string(),
//!     test_date: "2030-05-01".to_string(),
//!     ..Default::default()
//! }
//! .validate(today)?;
//!
//! let plan = generator.generate(&request, &CancellationToken::new()).await?;
//! println!("{}", plan.title);
//! # Ok(())
//! # }
//! ```

use jiff::{civil::Date, Zoned};
use log::{debug, error};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{PlannerError, Result},
    models::{StudyPlan, StudyRequest},
    provider::GenerationProvider,
    schema::{study_plan_schema, SchemaDescriptor},
    validate::{validate, PlanDraft},
};

pub mod builder;
pub mod prompt;


pub use builder::GeneratorBuilder;
pub use prompt::build_prompt;

/// Generates study plans through a provider.
pub struct PlanGenerator<P> {
    provider: P,
    schema: SchemaDescriptor,
}

impl<P: GenerationProvider> PlanGenerator<P> {
    /// Wraps a provider; the output schema is built once here.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            schema: study_plan_schema(),
        }
    }

    /// The structural output constraint supplied on every call.
    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    /// Generates a plan starting today.
    pub async fn generate(
        &self,
        request: &StudyRequest,
        token: &CancellationToken,
    ) -> Result<StudyPlan> {
        self.generate_from(request, Zoned::now().date(), token).await
    }

    /// Generates a plan whose schedule starts on `today`.
    ///
    /// Every task of the returned plan has `completed == false`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Cancelled` if `token` fires before the provider
    /// call resolves, and `PlannerError::GenerationFailed` for any provider,
    /// parse or validation failure.
    pub async fn generate_from(
        &self,
        request: &StudyRequest,
        today: Date,
        token: &CancellationToken,
    ) -> Result<StudyPlan> {
        if token.is_cancelled() {
            return Err(PlannerError::Cancelled);
        }

        let prompt = build_prompt(request, today);
        debug!("Generation prompt:\n{prompt}");

        let response = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(PlannerError::Cancelled),
            response = self.provider.generate_structured(&prompt, &self.schema) => response,
        };

        // A late resolution after cancellation is never reported.
        if token.is_cancelled() {
            return Err(PlannerError::Cancelled);
        }

        let raw = response.map_err(|e| {
            error!("Error generating study plan: {e}");
            PlannerError::generation_failed()
        })?;
        debug!("Raw provider response:\n{raw}");

        let draft = parse_response(&raw).map_err(|reason| {
            error!("Error generating study plan: {reason}");
            PlannerError::generation_failed()
        })?;

        Ok(draft.into_fresh_plan())
    }
}

/// Parses and validates raw provider text.
pub(crate) fn parse_response(raw: &str) -> std::result::Result<PlanDraft, String> {
    let json_text = strip_code_fence(raw.trim());
    let value: serde_json::Value =
        serde_json::from_str(json_text).map_err(|e| format!("response is not JSON: {e}"))?;
    validate(&value).map_err(|e| format!("invalid study plan structure received: {e}"))
}

/// Unwraps a markdown code fence such as ```` ```json ... ``` ````.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}
