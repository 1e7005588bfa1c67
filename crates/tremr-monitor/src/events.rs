//! Loop-to-UI handoff
//!
//! The loop never touches UI state. It publishes `MonitorEvent`s on a
//! single-producer channel and the UI task drains them on its own schedule.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::UnboundedSender;
use tremr_core::{Alert, EventIdentity};

use crate::session::{CycleReport, SessionSummary};
use crate::state::MonitorState;

#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    StateChanged(MonitorState),
    CycleStarted { at: DateTime<Utc> },
    FeedUnavailable { reason: String },
    Alerted(Alert),
    MalformedRecord { identity: EventIdentity, reason: String },
    Persisted { total: usize },
    PersistFailed { reason: String },
    CycleFinished(CycleReport),
    Stopped(SessionSummary),
}

/// Optional sender side of the UI channel
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<UnboundedSender<MonitorEvent>>,
}

impl EventSink {
    pub fn new(tx: UnboundedSender<MonitorEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Publish an event. A dropped receiver is not the loop's problem.
    pub fn send(&self, event: MonitorEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}
