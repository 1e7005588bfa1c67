//! Durable state for the monitor: paths, atomic JSON files and the
//! seen-event store

mod config_file;
mod error;
mod io;
mod paths;
mod seen;

pub use config_file::{load_or_create_config, save_config};
pub use error::StoreError;
pub use io::{atomic_write, read_json};
pub use paths::{Paths, HOME_ENV};
pub use seen::{SeenEventSet, SeenStore};
