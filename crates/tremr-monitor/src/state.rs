use serde::Serialize;

/// Lifecycle of a monitoring session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorState {
    Idle,
    Running,
    Fetching,
    Evaluating,
    Notifying,
    Stopped,
}

impl MonitorState {
    /// Inside a fetch/evaluate/notify pass
    pub fn in_cycle(self) -> bool {
        matches!(
            self,
            MonitorState::Fetching | MonitorState::Evaluating | MonitorState::Notifying
        )
    }
}

/// Inputs that drive `MonitorState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorSignal {
    Start,
    CycleDue,
    BatchReady,
    NoData,
    RelevantFound,
    AlertDelivered,
    CycleComplete,
    StopRequested,
}

/// Next state for a signal. Signals that make no sense in the current state
/// leave it unchanged; a stop request mid-cycle is deferred until the cycle
/// (and its persist) has completed.
pub fn transition(state: MonitorState, signal: MonitorSignal) -> MonitorState {
    use MonitorSignal::*;
    use MonitorState::*;

    match (state, signal) {
        (Stopped, _) => Stopped,
        (Idle | Running, StopRequested) => Stopped,
        (s, StopRequested) => s,

        (Idle, Start) => Running,
        (Running, CycleDue) => Fetching,
        (Fetching, BatchReady) => Evaluating,
        (Fetching, NoData) => Running,
        (Evaluating, RelevantFound) => Notifying,
        (Notifying, AlertDelivered) => Evaluating,
        (Evaluating, CycleComplete) => Running,

        (s, _) => s,
    }
}
