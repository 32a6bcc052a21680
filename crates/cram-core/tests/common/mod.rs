use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use cram_core::{
    params::StudyForm, provider::ProviderError, schema::SchemaDescriptor, ComfortLevel,
    GenerationProvider, PlanGenerator, Session,
};
use jiff::civil::{date, Date};

pub const BIOLOGY_PLAN: &str = r#"{
  "title": "Cell Biology Review",
  "weeks": [
    {
      "weekNumber": 1,
      "theme": "Membranes and transport",
      "dailyTasks": [
        {
          "label": "Monday, October 19",
          "tasks": [
            {"title": "Read chapter 3", "description": "Focus on membrane structure.", "completed": true},
            {"title": "Diagram transport", "description": "Draw passive and active transport."}
          ]
        },
        {
          "label": "Tuesday, October 20",
          "tasks": [
            {"title": "Practice quiz", "description": "Answer twenty questions on osmosis."}
          ]
        }
      ]
    }
  ]
}"#;

/// Provider returning a canned answer, optionally after a delay.
pub struct CannedProvider {
    response: Result<String, ProviderError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl CannedProvider {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl GenerationProvider for CannedProvider {
    async fn generate_structured(
        &self,
        _prompt: &str,
        _schema: &SchemaDescriptor,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.clone()
    }
}

pub fn today() -> Date {
    date(2026, 10, 19)
}

pub fn biology_form() -> StudyForm {
    StudyForm {
        topics: "Cell biology: membranes".to_string(),
        test_date: "2026-10-21".to_string(),
        comfort_level: ComfortLevel::Beginner,
    }
}

/// Builds a session around `provider`, returning its call counter alongside.
pub fn create_test_session(
    provider: CannedProvider,
) -> (Session<CannedProvider>, Arc<AtomicUsize>) {
    let calls = provider.calls();
    (Session::new(PlanGenerator::new(provider)), calls)
}
