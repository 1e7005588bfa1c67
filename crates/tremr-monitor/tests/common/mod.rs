#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tremr_core::{Alert, ObserverConfig, RawEvent};
use tremr_feed::{FeedOutcome, FeedSource};
use tremr_monitor::{MonitorSession, Notifier};
use tremr_store::SeenStore;

/// Serves outcomes in order, repeating the last one once exhausted
#[derive(Clone)]
pub struct ScriptedFeed {
    outcomes: Arc<Vec<FeedOutcome>>,
    fetches: Arc<AtomicUsize>,
}

impl ScriptedFeed {
    pub fn new(outcomes: Vec<FeedOutcome>) -> Self {
        assert!(!outcomes.is_empty());
        Self {
            outcomes: Arc::new(outcomes),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn repeating(batch: Vec<RawEvent>) -> Self {
        Self::new(vec![FeedOutcome::Batch(batch)])
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for ScriptedFeed {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> FeedOutcome {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        let idx = n.min(self.outcomes.len() - 1);
        self.outcomes[idx].clone()
    }
}

/// Records every alert it receives
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn notify(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}

pub fn manila_config() -> ObserverConfig {
    ObserverConfig {
        latitude: 14.5995,
        longitude: 120.9842,
        radius_km: 100.0,
        min_magnitude: 3.0,
        poll_interval_seconds: 60,
        ..ObserverConfig::default()
    }
}

pub fn near_event() -> RawEvent {
    RawEvent::new("29 October 2025", "08:26 AM", "14.60", "120.98")
        .with_magnitude("4.5")
        .with_depth("010 kilometers")
        .with_location("006 km N 45° W of Makati City")
}

pub fn far_event() -> RawEvent {
    RawEvent::new("29 October 2025", "09:10 AM", "20.0", "130.0")
        .with_magnitude("5.0")
        .with_location("Philippine Sea")
}

pub fn session_at(
    seen_path: &Path,
    feed: &ScriptedFeed,
    notifier: &RecordingNotifier,
) -> MonitorSession {
    MonitorSession::new(
        manila_config(),
        SeenStore::new(seen_path),
        Box::new(feed.clone()),
        Box::new(notifier.clone()),
    )
}

/// Serves one batch after a delay, so a stop can land mid-fetch
#[derive(Clone)]
pub struct SlowFeed {
    inner: ScriptedFeed,
    delay: std::time::Duration,
}

impl SlowFeed {
    pub fn new(batch: Vec<RawEvent>, delay: std::time::Duration) -> Self {
        Self {
            inner: ScriptedFeed::repeating(batch),
            delay,
        }
    }

    pub fn fetches(&self) -> usize {
        self.inner.fetches()
    }
}

#[async_trait]
impl FeedSource for SlowFeed {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch(&self) -> FeedOutcome {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch().await
    }
}
