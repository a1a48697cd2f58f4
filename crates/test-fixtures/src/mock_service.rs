//! Scripted in-memory `IPredictionService`.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::time::Duration;

use taxonomist_core::errors::{ServiceError, TaxonomistResult, TransportError};
use taxonomist_core::models::{Prediction, PredictionPayload, PredictionSource};
use taxonomist_core::traits::IPredictionService;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Prediction(Prediction),
    Service { status: u16, message: String },
    Transport(String),
}

impl MockResponse {
    pub fn gdp(value: f64) -> Self {
        Self::Prediction(Prediction::new(value, PredictionSource::Prediction))
    }

    pub fn fallback(value: f64) -> Self {
        Self::Prediction(Prediction::new(value, PredictionSource::Fallback))
    }
}

/// Replays scripted responses in order and records every payload it receives.
///
/// When the script runs out the last response repeats.
pub struct MockPredictionService {
    script: Mutex<VecDeque<MockResponse>>,
    last: Mutex<Option<MockResponse>>,
    received: Mutex<Vec<PredictionPayload>>,
    gate: Option<Mutex<(Sender<()>, Receiver<()>)>>,
}

/// Lets a test hold a request in flight until it calls [`Gate::release`].
pub struct Gate {
    entered: Receiver<()>,
    release: Sender<()>,
}

impl Gate {
    /// Block until the service has received a request.
    pub fn wait_until_entered(&self) {
        self.entered
            .recv_timeout(Duration::from_secs(5))
            .expect("mock service was never called");
    }

    /// Let the held request complete.
    pub fn release(&self) {
        let _ = self.release.send(());
    }
}

impl MockPredictionService {
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            received: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Always answer with one response.
    pub fn always(response: MockResponse) -> Self {
        Self::new(vec![response])
    }

    /// Like [`MockPredictionService::always`], but each call waits on a [`Gate`].
    pub fn gated(response: MockResponse) -> (Self, Gate) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let mut service = Self::always(response);
        service.gate = Some(Mutex::new((entered_tx, release_rx)));
        (
            service,
            Gate {
                entered: entered_rx,
                release: release_tx,
            },
        )
    }

    /// Payloads received so far.
    pub fn received(&self) -> Vec<PredictionPayload> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    fn next_response(&self) -> MockResponse {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = Some(next);
        }
        last.clone()
            .unwrap_or_else(|| MockResponse::Transport("mock service has no script".into()))
    }
}

impl IPredictionService for MockPredictionService {
    fn predict(&self, payload: &PredictionPayload) -> TaxonomistResult<Prediction> {
        self.received.lock().unwrap().push(*payload);

        if let Some(gate) = &self.gate {
            let gate = gate.lock().unwrap();
            let _ = gate.0.send(());
            let _ = gate.1.recv_timeout(Duration::from_secs(5));
        }

        match self.next_response() {
            MockResponse::Prediction(prediction) => Ok(prediction),
            MockResponse::Service { status, message } => {
                Err(ServiceError::Rejected { status, message }.into())
            }
            MockResponse::Transport(reason) => Err(TransportError::Network { reason }.into()),
        }
    }
}
