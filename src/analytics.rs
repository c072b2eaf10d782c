//! Usage analytics: an [`EventBus`](crate::events::EventBus) observer that
//! logs every event and tallies a [`UsageStats`] summary.
//!
//! Nothing leaves the process; events are written through `tracing` and
//! the totals are shown in the session summary.

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::events::Event;

const CATEGORY: &str = "Business Tool Usage";

/// Counts collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageStats {
    pub generated: u64,
    pub rejected: u64,
    pub demos: u64,
    /// Replies per rating set, index 0 is one star.
    pub by_rating: [u64; 5],
}

impl UsageStats {
    /// Fold one event into the tally.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::ResponseGenerated { rating_set, .. } => {
                self.generated += 1;
                if let Some(slot) = usize::from(*rating_set)
                    .checked_sub(1)
                    .and_then(|i| self.by_rating.get_mut(i))
                {
                    *slot += 1;
                }
            }
            Event::SubmissionRejected { .. } => self.rejected += 1,
            Event::DemoLoaded { .. } => self.demos += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.generated == 0 && self.rejected == 0 && self.demos == 0
    }
}

/// Spawn the observer. It runs until every sender of the bus is dropped,
/// then returns what it counted.
pub fn spawn(mut rx: broadcast::Receiver<Event>) -> JoinHandle<UsageStats> {
    tokio::spawn(async move {
        let mut stats = UsageStats::default();
        loop {
            match rx.recv().await {
                Ok(event) => {
                    log_event(&event);
                    stats.record(&event);
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "analytics fell behind, events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
        stats
    })
}

fn log_event(event: &Event) {
    match event {
        Event::ResponseGenerated {
            business_type,
            rating_set,
            template_index,
            closing,
        } => tracing::info!(
            event = event.name(),
            category = CATEGORY,
            business_type = %business_type,
            rating_set,
            template_index,
            closing = ?closing
        ),
        Event::SubmissionRejected { errors } => tracing::info!(
            event = event.name(),
            category = CATEGORY,
            errors = errors.len(),
            first = errors.first().map(String::as_str).unwrap_or_default()
        ),
        Event::DemoLoaded { business_name } => tracing::info!(
            event = event.name(),
            category = CATEGORY,
            business_name = %business_name
        ),
    }
}
