//! The monitoring loop: fetch, dedupe, filter, notify, persist

mod events;
mod notifier;
mod session;
mod state;
mod stop;

pub use events::{EventSink, MonitorEvent};
pub use notifier::{DesktopNotifier, LogNotifier, Notifier, NotifierSet};
pub use session::{CycleReport, MonitorSession, SessionSummary, TICK};
pub use state::{transition, MonitorSignal, MonitorState};
pub use stop::StopHandle;
