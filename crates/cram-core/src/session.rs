//! Async driver tying the controller to a generator.

use std::future::Future;

use jiff::civil::Date;
use log::info;

use crate::{
    error::Result,
    generator::PlanGenerator,
    lifecycle::{RequestController, Transition},
    params::StudyForm,
    provider::GenerationProvider,
};

/// A controller plus the generator that feeds it.
pub struct Session<P> {
    generator: PlanGenerator<P>,
    controller: RequestController,
}

impl<P: GenerationProvider> Session<P> {
    pub fn new(generator: PlanGenerator<P>) -> Self {
        Self {
            generator,
            controller: RequestController::new(),
        }
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RequestController {
        &mut self.controller
    }

    /// Validates `form`, runs one generation and applies its outcome.
    ///
    /// The generation races `interrupt`; if the interrupt resolves first the
    /// request is cancelled and whatever the provider eventually returns is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` before any provider call when the
    /// form is invalid. Generation failures are not errors here: they are
    /// recorded on the controller and reported as [`Transition::Failed`].
    pub async fn generate<F>(
        &mut self,
        form: &StudyForm,
        today: Date,
        interrupt: F,
    ) -> Result<Transition>
    where
        F: Future<Output = ()>,
    {
        let request = match form.validate(today) {
            Ok(request) => request,
            Err(err) => {
                self.controller.reject(&err);
                return Err(err);
            }
        };

        let ticket = self.controller.begin(request);
        let generation = self
            .generator
            .generate_from(ticket.request(), today, ticket.token());
        let outcome = tokio::select! {
            outcome = generation => outcome,
            _ = interrupt => {
                info!("Generation interrupted");
                return Ok(self.controller.cancel());
            }
        };

        Ok(self.controller.complete(ticket.id(), outcome))
    }
}
