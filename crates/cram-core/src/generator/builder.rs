//! Builder for creating and configuring Gemini-backed generators.

use std::env;

use log::debug;

use super::PlanGenerator;
use crate::{
    error::{PlannerError, Result},
    provider::{GeminiConfig, GeminiProvider},
};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fallback environment variable for the API key.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "CRAM_MODEL";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_ENV: &str = "CRAM_ENDPOINT";

/// Builder for creating and configuring [`PlanGenerator`] instances.
///
/// Explicit settings win over environment variables, which win over the
/// defaults of [`GeminiConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    ///
    /// If not specified, reads `$GEMINI_API_KEY`, then `$API_KEY`.
    pub fn with_api_key<S: Into<String>>(mut self, api_key: Option<S>) -> Self {
        if let Some(key) = api_key {
            self.api_key = Some(key.into());
        }
        self
    }

    /// Sets the model name; defaults to `$CRAM_MODEL` or `gemini-2.5-flash`.
    pub fn with_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.model = Some(model.into());
        }
        self
    }

    /// Sets the API endpoint; defaults to `$CRAM_ENDPOINT` or the public API.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets the transport timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Resolves the final provider configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if no API key is available.
    pub fn config(self) -> Result<GeminiConfig> {
        let defaults = GeminiConfig::default();

        let api_key = self
            .api_key
            .or_else(|| non_empty_env(API_KEY_ENV))
            .or_else(|| non_empty_env(FALLBACK_API_KEY_ENV))
            .ok_or_else(|| {
                PlannerError::configuration(format!(
                    "{API_KEY_ENV} environment variable not set"
                ))
            })?;

        Ok(GeminiConfig {
            api_key,
            model: self
                .model
                .or_else(|| non_empty_env(MODEL_ENV))
                .unwrap_or(defaults.model),
            endpoint: self
                .endpoint
                .or_else(|| non_empty_env(ENDPOINT_ENV))
                .unwrap_or(defaults.endpoint),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        })
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if no API key is available or
    /// the HTTP client cannot be created.
    pub fn build(self) -> Result<PlanGenerator<GeminiProvider>> {
        let config = self.config()?;
        debug!("Using model {} at {}", config.model, config.endpoint);
        let provider = GeminiProvider::new(config)
            .map_err(|e| PlannerError::configuration(format!("HTTP client setup failed: {e}")))?;
        Ok(PlanGenerator::new(provider))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
