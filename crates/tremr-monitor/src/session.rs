//! One monitoring session: owns config, seen set, feed and sinks
//!
//! Each cycle fetches a batch, skips identities already seen, runs the rest
//! through the relevance filter, alerts on the relevant ones, marks every
//! parsed identity as seen and persists the set if it grew. Rows that fail
//! to parse stay unseen so a corrected revision is evaluated later. Between
//! cycles the loop sleeps in one-second ticks so a stop request is honoured
//! promptly, but never in the middle of a cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tremr_core::{assess, identity_of, Alert, EventIdentity, ObserverConfig};
use tremr_feed::{FeedOutcome, FeedSource};
use tremr_store::{SeenEventSet, SeenStore};

use crate::events::{EventSink, MonitorEvent};
use crate::notifier::Notifier;
use crate::state::{transition, MonitorSignal, MonitorState};
use crate::stop::StopHandle;

/// Granularity of the inter-cycle wait
pub const TICK: Duration = Duration::from_secs(1);

/// Counters for one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub started_at: DateTime<Utc>,
    pub fetched: usize,
    pub skipped: usize,
    pub evaluated: usize,
    pub malformed: usize,
    pub alerted: usize,
    pub persisted: bool,
    pub feed_error: Option<String>,
}

impl CycleReport {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            fetched: 0,
            skipped: 0,
            evaluated: 0,
            malformed: 0,
            alerted: 0,
            persisted: false,
            feed_error: None,
        }
    }
}

/// Totals across a session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub cycles: usize,
    pub alerts: usize,
    pub malformed: usize,
    pub feed_failures: usize,
    pub seen: usize,
}

impl SessionSummary {
    fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;
        self.alerts += report.alerted;
        self.malformed += report.malformed;
        if report.feed_error.is_some() {
            self.feed_failures += 1;
        }
    }
}

pub struct MonitorSession {
    config: ObserverConfig,
    store: SeenStore,
    seen: SeenEventSet,
    /// Malformed identities already reported this session
    reported_malformed: HashSet<EventIdentity>,
    feed: Box<dyn FeedSource>,
    notifier: Box<dyn Notifier>,
    state: MonitorState,
    stop: StopHandle,
    events: EventSink,
}

impl MonitorSession {
    /// Build a session and load the seen set from `store`
    pub fn new(
        config: ObserverConfig,
        store: SeenStore,
        feed: Box<dyn FeedSource>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let seen = store.load();
        Self {
            config,
            store,
            seen,
            reported_malformed: HashSet::new(),
            feed,
            notifier,
            state: MonitorState::Idle,
            stop: StopHandle::new(),
            events: EventSink::default(),
        }
    }

    /// Publish `MonitorEvent`s to a UI task
    pub fn with_events(mut self, tx: UnboundedSender<MonitorEvent>) -> Self {
        self.events = EventSink::new(tx);
        self
    }

    /// Share an existing stop flag instead of the session's own
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn seen(&self) -> &SeenEventSet {
        &self.seen
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    fn signal(&mut self, signal: MonitorSignal) {
        let next = transition(self.state, signal);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?signal, "monitor state change");
            self.state = next;
            self.events.send(MonitorEvent::StateChanged(next));
        }
    }

    /// One fetch, evaluate, notify, persist pass
    pub async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::new(Utc::now());
        if self.state == MonitorState::Idle {
            self.signal(MonitorSignal::Start);
        }

        self.signal(MonitorSignal::CycleDue);
        self.events.send(MonitorEvent::CycleStarted {
            at: report.started_at,
        });

        tracing::info!(feed = self.feed.name(), "fetching earthquake data");
        let batch = match self.feed.fetch().await {
            FeedOutcome::Batch(events) if !events.is_empty() => events,
            FeedOutcome::Batch(_) => {
                return self.finish_without_data(report, "feed returned no events".to_string());
            }
            FeedOutcome::NoData { reason } => {
                return self.finish_without_data(report, reason);
            }
        };

        report.fetched = batch.len();
        tracing::info!(count = report.fetched, "fetched earthquakes");
        self.signal(MonitorSignal::BatchReady);

        let mut added = 0usize;
        for raw in &batch {
            let identity = identity_of(raw);
            if self.seen.contains(&identity) {
                report.skipped += 1;
                continue;
            }
            report.evaluated += 1;

            match assess(raw, &self.config) {
                Ok(assessment) if assessment.relevant => {
                    tracing::info!(
                        identity = %identity,
                        magnitude = assessment.record.magnitude,
                        distance_km = assessment.distance_km,
                        location = assessment.record.location.as_deref().unwrap_or("Unknown"),
                        "new nearby earthquake"
                    );
                    let alert = Alert::new(identity.clone(), &assessment);
                    self.signal(MonitorSignal::RelevantFound);
                    self.notifier.notify(&alert);
                    self.signal(MonitorSignal::AlertDelivered);
                    self.events.send(MonitorEvent::Alerted(alert));
                    report.alerted += 1;
                }
                Ok(assessment) => {
                    tracing::debug!(
                        identity = %identity,
                        magnitude = assessment.record.magnitude,
                        distance_km = assessment.distance_km,
                        "earthquake outside alert criteria"
                    );
                }
                Err(e) => {
                    report.malformed += 1;
                    if self.reported_malformed.insert(e.identity.clone()) {
                        tracing::warn!(error = %e, "skipping malformed earthquake record");
                        self.events.send(MonitorEvent::MalformedRecord {
                            identity: e.identity.clone(),
                            reason: e.reason.to_string(),
                        });
                    }
                    continue;
                }
            }

            if self.seen.add(identity) {
                added += 1;
            }
        }

        if added > 0 {
            match self.store.persist(&self.seen) {
                Ok(()) => {
                    report.persisted = true;
                    self.events.send(MonitorEvent::Persisted {
                        total: self.seen.len(),
                    });
                }
                Err(e) => {
                    // In-memory set keeps the additions for the rest of the session
                    tracing::error!(error = %e, "failed to persist seen-event store");
                    self.events.send(MonitorEvent::PersistFailed {
                        reason: e.to_string(),
                    });
                }
            }
        }

        if report.alerted > 0 {
            tracing::info!(count = report.alerted, "processed new nearby earthquakes");
        }

        self.signal(MonitorSignal::CycleComplete);
        self.events.send(MonitorEvent::CycleFinished(report.clone()));
        report
    }

    fn finish_without_data(&mut self, mut report: CycleReport, reason: String) -> CycleReport {
        tracing::warn!(reason = %reason, "no earthquake data this cycle");
        self.events.send(MonitorEvent::FeedUnavailable {
            reason: reason.clone(),
        });
        report.feed_error = Some(reason);
        self.signal(MonitorSignal::NoData);
        self.events.send(MonitorEvent::CycleFinished(report.clone()));
        report
    }

    /// Run cycles until the stop handle fires
    pub async fn run(mut self) -> SessionSummary {
        self.signal(MonitorSignal::Start);
        tracing::info!(
            latitude = self.config.latitude,
            longitude = self.config.longitude,
            radius_km = self.config.radius_km,
            min_magnitude = self.config.min_magnitude,
            interval_secs = self.config.poll_interval_seconds,
            seen = self.seen.len(),
            "earthquake monitor started"
        );

        let mut summary = SessionSummary::default();
        while !self.stop.is_stopped() {
            let report = self.run_cycle().await;
            summary.record(&report);
            self.wait_for_next_cycle().await;
        }

        self.signal(MonitorSignal::StopRequested);
        summary.seen = self.seen.len();
        tracing::info!(
            cycles = summary.cycles,
            alerts = summary.alerts,
            "monitoring stopped"
        );
        self.events.send(MonitorEvent::Stopped(summary.clone()));
        summary
    }

    async fn wait_for_next_cycle(&self) {
        for _ in 0..self.config.poll_interval_seconds {
            if self.stop.is_stopped() {
                break;
            }
            tokio::time::sleep(TICK).await;
        }
    }
}
