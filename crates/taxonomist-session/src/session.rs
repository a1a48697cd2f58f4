//! PredictionSession — validate, build the payload, call the service, and
//! record the outcome. An AtomicBool single-flight gate rejects overlapping
//! submissions.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use taxonomist_client::HttpPredictionClient;
use taxonomist_core::constants::GENERIC_FAILURE_MESSAGE;
use taxonomist_core::errors::{TaxonomistError, TaxonomistResult};
use taxonomist_core::models::{IndicatorField, IndicatorSet, SessionSnapshot};
use taxonomist_core::traits::{IPredictionService, IValidator};
use taxonomist_core::TaxonomistConfig;
use taxonomist_observability::events;
use taxonomist_validation::ValidationEngine;
use uuid::Uuid;

use crate::collector::{InputCollector, InputListener};
use crate::state::SubmissionState;

/// Called with the new snapshot after every state transition.
pub type StateListener = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

type SharedStateListener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// One user's calculator session.
pub struct PredictionSession {
    inputs: Mutex<InputCollector>,
    state: Mutex<SubmissionState>,
    /// Guard: only one submission can be in flight at a time.
    in_flight: AtomicBool,
    validator: Box<dyn IValidator>,
    service: Box<dyn IPredictionService>,
    listeners: Mutex<Vec<SharedStateListener>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PredictionSession {
    /// A session using the default validation rules.
    pub fn new(service: impl IPredictionService + 'static) -> Self {
        Self {
            inputs: Mutex::new(InputCollector::new()),
            state: Mutex::new(SubmissionState::Idle),
            in_flight: AtomicBool::new(false),
            validator: Box::new(ValidationEngine::new()),
            service: Box::new(service),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// A session talking HTTP to the configured endpoint.
    pub fn from_config(config: &TaxonomistConfig) -> TaxonomistResult<Self> {
        config.validate()?;
        let client = HttpPredictionClient::from_config(&config.predictor)?;
        tracing::info!(endpoint = client.endpoint_url(), "prediction session ready");
        Ok(Self::new(client))
    }

    /// Replace the default validation rules.
    pub fn with_validator(mut self, validator: impl IValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    // --- Input collection ---
    // Listeners run after the inputs lock is released, so they may call
    // back into the session.

    pub fn set_field(&self, field: IndicatorField, value: impl Into<String>) {
        let notice = lock(&self.inputs).store(field, value);
        notice.deliver();
    }

    pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> TaxonomistResult<()> {
        let field: IndicatorField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Copy of the current raw values.
    pub fn indicators(&self) -> IndicatorSet {
        lock(&self.inputs).indicators().clone()
    }

    pub fn reset_inputs(&self) {
        let notices = lock(&self.inputs).clear();
        for notice in notices {
            notice.deliver();
        }
    }

    pub fn subscribe_inputs(&self, listener: InputListener) {
        lock(&self.inputs).subscribe(listener);
    }

    // --- Observable state ---

    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.state).snapshot()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.state).clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed)
    }

    pub fn on_state_change(&self, listener: StateListener) {
        lock(&self.listeners).push(Arc::from(listener));
    }

    // --- Submission ---

    /// Run the full pipeline on the current inputs.
    ///
    /// Validation, transport and service failures are recorded in the
    /// session state and the resulting snapshot is returned. The only error
    /// returned to the caller is `SubmissionInFlight`, which leaves the state
    /// untouched.
    pub fn validate_and_submit(&self) -> TaxonomistResult<SessionSnapshot> {
        let _guard = InFlightGuard::acquire(self).ok_or_else(|| {
            events::submission_rejected();
            TaxonomistError::SubmissionInFlight
        })?;

        let submission_id = Uuid::new_v4().to_string();
        events::submission_started(&submission_id);
        self.transition(SubmissionState::begin);

        let indicators = self.indicators();
        let payload = match self.validator.validated_payload(&indicators) {
            Ok(payload) => payload,
            Err(e) => {
                events::validation_failed(&submission_id, e.field().form_key(), &e.to_string());
                return Ok(self.transition(|s| s.reject(&e)));
            }
        };

        self.transition(SubmissionState::dispatch);
        let started = Instant::now();
        let outcome = self.service.predict(&payload);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let snapshot = match outcome {
            Ok(prediction) => {
                events::prediction_received(
                    &submission_id,
                    prediction.gdp,
                    prediction.source.label(),
                    elapsed_ms,
                );
                self.transition(|s| s.succeed(prediction))
            }
            Err(e) => {
                let message = e.user_message();
                events::prediction_failed(&submission_id, &message, elapsed_ms);
                self.transition(|s| s.fail(message))
            }
        };
        Ok(snapshot)
    }

    /// Apply one transition, then notify listeners with no lock held.
    fn transition(&self, apply: impl FnOnce(&mut SubmissionState)) -> SessionSnapshot {
        let snapshot = {
            let mut state = lock(&self.state);
            apply(&mut state);
            state.snapshot()
        };
        let listeners = lock(&self.listeners).clone();
        for listener in &listeners {
            listener(&snapshot);
        }
        snapshot
    }
}

impl fmt::Debug for PredictionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionSession")
            .field("state", &self.state())
            .field("in_flight", &self.is_in_flight())
            .finish_non_exhaustive()
    }
}

/// Holds the single-flight flag for one submission.
///
/// Dropping it always clears the flag. A submission that never reached a
/// terminal state (the service panicked) is closed out as failed first.
struct InFlightGuard<'a> {
    session: &'a PredictionSession,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(session: &'a PredictionSession) -> Option<Self> {
        session
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { session })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let unfinished = lock(&self.session.state).is_unfinished();
        if unfinished {
            self.session.transition(|s| {
                *s = SubmissionState::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            });
        }
        self.session.in_flight.store(false, Ordering::SeqCst);
    }
}
