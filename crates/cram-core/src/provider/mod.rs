//! Boundary to the external generative model.
//!
//! A provider turns a prompt plus a structural output schema into raw text.
//! The text is untrusted: [`crate::generator::PlanGenerator`] always re-parses
//! and re-validates it.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::schema::SchemaDescriptor;

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiProvider};

/// Transport and provider failures.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A generative model that can emit schema-guided structured output.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generates text for `prompt`, constrained to `schema`.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, ProviderError>;
}

#[async_trait]
impl GenerationProvider for Arc<dyn GenerationProvider> {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, ProviderError> {
        (**self).generate_structured(prompt, schema).await
    }
}
