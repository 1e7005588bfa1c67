//! Raw earthquake feeds: the agency web page and local JSON files

mod error;
mod file;
mod phivolcs;
mod source;

pub use error::FeedError;
pub use file::FileFeed;
pub use phivolcs::{parse_event_table, PhivolcsFeed, MIN_TABLE_ROWS};
pub use source::{check_connection, ConnectionStatus, FeedOutcome, FeedSource};
