//! The solve request lifecycle.
//!
//! `Idle -> Pending -> (Success | Error)`, re-entered through `Pending` on every
//! new request. Only the most recently issued request may settle the result:
//! issuing a new one aborts the previous request and any completion that still
//! slips through is discarded by generation.

mod client;

pub use client::{HttpSolveClient, SolveClient, SolveRequest};

use crate::canvas::EncodedImage;
use crate::error::SolveError;
use futures::FutureExt as _;
use futures::future::{AbortHandle, Abortable, BoxFuture};
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Label used for every failure on the solve path.
pub const CONNECTION_ERROR_LABEL: &str = "Connection error";

/// A well formed answer from the solver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolveAnswer {
    pub label: String,
    /// What the solver recognized in the drawing.
    #[serde(default)]
    pub expression: Option<String>,
    /// May span several lines.
    pub answer: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A failed solve, already worded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveFailure {
    pub label: String,
    pub answer: String,
    pub note: Option<String>,
}

impl From<&SolveError> for SolveFailure {
    fn from(err: &SolveError) -> Self {
        Self {
            label: CONNECTION_ERROR_LABEL.to_owned(),
            answer: err.user_message(),
            note: Some(err.to_string()),
        }
    }
}

/// Exactly one of these is current at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SolveResult {
    #[default]
    Idle,
    Pending,
    Success(SolveAnswer),
    Error(SolveFailure),
}

impl SolveResult {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending => "Pending",
            Self::Success(_) => "Success",
            Self::Error(_) => "Error",
        }
    }
}

struct Completion {
    generation: u64,
    outcome: Result<SolveAnswer, SolveError>,
}

/// Owns the [`SolveResult`] and drives it through the request lifecycle.
///
/// All state changes happen on the caller's thread: request futures only post
/// their outcome to an inbox, which [`SolveOrchestrator::poll`] drains.
pub struct SolveOrchestrator {
    result: SolveResult,
    generation: u64,
    in_flight: Option<AbortHandle>,
    inbox: Arc<Mutex<VecDeque<Completion>>>,
}

impl std::fmt::Debug for SolveOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveOrchestrator")
            .field("result", &self.result)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight.is_some())
            .finish()
    }
}

impl Default for SolveOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveOrchestrator {
    pub fn new() -> Self {
        Self {
            result: SolveResult::Idle,
            generation: 0,
            in_flight: None,
            inbox: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    /// Start solving `image`.
    ///
    /// The result switches to `Pending` immediately. The returned future
    /// performs the single outbound request and must be spawned by the caller;
    /// its outcome is applied on the next [`Self::poll`].
    pub fn solve(
        &mut self,
        client: &dyn SolveClient,
        image: &EncodedImage,
    ) -> BoxFuture<'static, ()> {
        self.supersede();
        self.result = SolveResult::Pending;

        let generation = self.generation;
        let request = client.solve(SolveRequest::from_image(image));
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        let inbox = Arc::clone(&self.inbox);

        log::info!("Solve request #{generation} dispatched");

        async move {
            match Abortable::new(request, registration).await {
                Ok(outcome) => inbox.lock().push_back(Completion {
                    generation,
                    outcome,
                }),
                Err(_) => log::debug!("Solve request #{generation} aborted"),
            }
        }
        .boxed()
    }

    /// Apply finished requests. Returns `true` if the result changed.
    pub fn poll(&mut self) -> bool {
        let completions: Vec<Completion> = self.inbox.lock().drain(..).collect();
        let mut changed = false;

        for Completion {
            generation,
            outcome,
        } in completions
        {
            if generation != self.generation {
                log::debug!("Discarding superseded solve response #{generation}");
                continue;
            }

            self.in_flight = None;
            self.result = match outcome {
                Ok(answer) => {
                    log::info!("Solve request #{generation} succeeded: {}", answer.label);
                    SolveResult::Success(answer)
                }
                Err(err) => {
                    log::warn!("Solve request #{generation} failed: {err}");
                    SolveResult::Error(SolveFailure::from(&err))
                }
            };
            changed = true;
        }

        changed
    }

    /// Back to `Idle`. Any request still in flight is dropped as well.
    pub fn reset(&mut self) {
        self.supersede();
        self.result = SolveResult::Idle;
    }

    fn supersede(&mut self) {
        self.generation += 1;
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_accepts_null_optionals() {
        let answer: SolveAnswer = serde_json::from_str(
            r#"{"label":"Simplified","expression":null,"answer":"4","note":null}"#,
        )
        .unwrap();
        assert_eq!(answer.expression, None);
        assert_eq!(answer.note, None);
        assert_eq!(answer.answer, "4");
    }

    #[test]
    fn test_answer_requires_label_and_answer() {
        assert!(serde_json::from_str::<SolveAnswer>(r#"{"label":"Result"}"#).is_err());
        assert!(serde_json::from_str::<SolveAnswer>(r#"{"answer":"x = 2"}"#).is_err());
    }

    #[test]
    fn test_failure_wording() {
        let err = SolveError::Status {
            status: 502,
            body: String::new(),
        };
        let failure = SolveFailure::from(&err);
        assert_eq!(failure.label, CONNECTION_ERROR_LABEL);
        assert!(!failure.answer.is_empty());
        assert_eq!(failure.note.as_deref(), Some("solver responded with status 502: "));
    }

    #[test]
    fn test_reset_from_idle() {
        let mut solver = SolveOrchestrator::new();
        solver.reset();
        assert_eq!(solver.result(), &SolveResult::Idle);
        assert!(!solver.poll());
    }
}
