//! Decoupled event bus for usage events.
//!
//! Callers of the engine emit events via [`EventBus::emit`]; observers such
//! as [`analytics`](crate::analytics) subscribe via [`EventBus::subscribe`].
//! Built on [`tokio::sync::broadcast`] so multiple listeners can react
//! independently. The engine itself never emits.

use tokio::sync::broadcast;

use crate::engine::{Closing, GeneratedResponse};
use crate::submission::{ReviewSubmission, ValidationErrors};

/// Events that flow through the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A reply was produced for a valid submission.
    ResponseGenerated {
        business_type: String,
        /// Template set used, after fallback; not the submitted rating.
        rating_set: u8,
        template_index: usize,
        closing: Option<Closing>,
    },
    /// A submission failed validation (carries the messages shown).
    SubmissionRejected { errors: Vec<String> },
    /// Demo data was loaded into the draft.
    DemoLoaded { business_name: String },
}

impl Event {
    pub fn generated(submission: &ReviewSubmission, reply: &GeneratedResponse) -> Self {
        Event::ResponseGenerated {
            business_type: submission.business_type.trim().to_string(),
            rating_set: reply.rating_set,
            template_index: reply.template_index,
            closing: reply.closing,
        }
    }

    pub fn rejected(errors: &ValidationErrors) -> Self {
        Event::SubmissionRejected {
            errors: errors.messages(),
        }
    }

    /// Stable event name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::ResponseGenerated { .. } => "review_response_generated",
            Event::SubmissionRejected { .. } => "review_submission_rejected",
            Event::DemoLoaded { .. } => "demo_loaded",
        }
    }
}

/// A broadcast channel that any component can emit to or subscribe from.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    /// Returns the number of receivers that will see it.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to events. Returns a receiver that yields all
    /// future events (does not replay past ones).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
