//! Request lifecycle controller.
//!
//! The controller owns the [`PlanStore`], the error shown to the user and the
//! single in-flight generation handle. It is a plain synchronous state
//! machine; the asynchronous part (awaiting the provider) happens outside it
//! and reports back through [`RequestController::complete`]:
//!
//! ```text
//!            begin                complete(Ok)
//!   Idle ───────────▶ Loading ───────────────▶ Success
//!    ▲                 │   │   complete(Err)
//!    │      cancel     │   └───────────────▶ Failed
//!    └─────────────────┘
//!
//!   Success | Failed ──begin──▶ Loading      (supersedes)
//!   any ──reset──▶ Idle         any ──import──▶ Success
//! ```
//!
//! Each generation is identified by a [`Ticket`]. A completion is only
//! applied if its ticket is still the active one and its token has not been
//! cancelled; anything else is discarded without touching state.

use std::fmt;

use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{PlannerError, Result},
    models::{StudyPlan, StudyRequest, TaskPosition},
    store::PlanStore,
    transfer::import_bytes,
};

/// Observable state of the generation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing in flight and no plan
    #[default]
    Idle,
    /// A generation is in flight
    Loading,
    /// A plan is installed
    Success,
    /// The last generation failed; an error message is recorded
    Failed,
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success => "success",
            RequestState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a controller operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active generation produced a plan (`Success`)
    Succeeded,
    /// The active generation failed (`Failed`)
    Failed,
    /// The active generation was abandoned; state is back to `Idle`
    Cancelled,
    /// A stale or cancelled result arrived and was ignored
    Discarded,
    /// The plan was cleared (`Idle`)
    Reset,
    /// An imported plan was installed (`Success`)
    Imported,
    /// Nothing to do
    Unchanged,
}

/// Monotonic identifier of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for one in-flight generation.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: RequestId,
    token: CancellationToken,
    request: StudyRequest,
}

impl Ticket {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Token the generation must observe.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn request(&self) -> &StudyRequest {
        &self.request
    }
}

#[derive(Debug)]
struct InFlight {
    id: RequestId,
    token: CancellationToken,
}

/// Single-flight generation state machine plus the plan it produced.
#[derive(Debug, Default)]
pub struct RequestController {
    state: RequestState,
    store: PlanStore,
    error: Option<String>,
    in_flight: Option<InFlight>,
    last_id: u64,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// The current plan, if any.
    pub fn plan(&self) -> Option<&StudyPlan> {
        self.store.current()
    }

    /// The single error message to display, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a synchronous input error without touching plan or state.
    pub fn reject(&mut self, err: &PlannerError) {
        self.error = Some(err.to_string());
    }

    /// Starts a new generation.
    ///
    /// Clears the previous error and plan. An in-flight generation is
    /// cancelled first so its result can never be applied.
    pub fn begin(&mut self, request: StudyRequest) -> Ticket {
        if let Some(previous) = self.in_flight.take() {
            warn!("Superseding in-flight generation {}", previous.id);
            previous.token.cancel();
        }

        self.last_id += 1;
        let id = RequestId(self.last_id);
        let token = CancellationToken::new();

        self.in_flight = Some(InFlight {
            id,
            token: token.clone(),
        });
        self.error = None;
        self.store.clear();
        self.state = RequestState::Loading;
        info!("Generation {id} started");

        Ticket { id, token, request }
    }

    /// Applies the outcome of the generation identified by `id`.
    ///
    /// Results for superseded or cancelled tickets are discarded.
    pub fn complete(&mut self, id: RequestId, outcome: Result<StudyPlan>) -> Transition {
        let active = matches!(
            &self.in_flight,
            Some(in_flight) if in_flight.id == id && !in_flight.token.is_cancelled()
        );
        if !active {
            warn!("Discarding result of stale generation {id}");
            return Transition::Discarded;
        }

        match outcome {
            Err(PlannerError::Cancelled) => {
                warn!("Discarding cancelled result of generation {id}");
                Transition::Discarded
            }
            Ok(plan) => {
                self.in_flight = None;
                self.store.install(plan);
                self.state = RequestState::Success;
                info!("Generation {id} succeeded");
                Transition::Succeeded
            }
            Err(err) => {
                self.in_flight = None;
                self.error = Some(err.to_string());
                self.state = RequestState::Failed;
                info!("Generation {id} failed");
                Transition::Failed
            }
        }
    }

    /// Abandons the in-flight generation, returning to `Idle` without error.
    pub fn cancel(&mut self) -> Transition {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.token.cancel();
                self.error = None;
                self.state = RequestState::Idle;
                info!("Generation {} cancelled", in_flight.id);
                Transition::Cancelled
            }
            None => Transition::Unchanged,
        }
    }

    /// Clears the plan and error and returns to `Idle`.
    pub fn reset(&mut self) -> Transition {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.token.cancel();
        }
        self.store.clear();
        self.error = None;
        self.state = RequestState::Idle;
        info!("Plan reset");
        Transition::Reset
    }

    /// Installs a plan from an exported file, from any state.
    ///
    /// On failure the error is recorded and the existing plan and state are
    /// left untouched.
    pub fn import(&mut self, bytes: &[u8]) -> Result<Transition> {
        let plan = match import_bytes(bytes) {
            Ok(plan) => plan,
            Err(err) => {
                let err = PlannerError::from(err);
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        if let Some(in_flight) = self.in_flight.take() {
            in_flight.token.cancel();
        }
        self.store.install(plan);
        self.error = None;
        self.state = RequestState::Success;
        info!("Imported plan");
        Ok(Transition::Imported)
    }

    /// Flips one task's completion flag; a missing task is a silent no-op.
    pub fn toggle_task(&mut self, position: TaskPosition) -> bool {
        self.store.toggle_task(position)
    }
}
