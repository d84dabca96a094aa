//! Asynchronous event log.
//!
//! Domain events (registrations, new posts, applied likes) are submitted to
//! an [`EventLog`] from the request path and written by a single background
//! worker, in submission order, to an append-only file. Each line is also
//! mirrored to a secondary output (stdout by default).
//!
//! If the file cannot be opened the worker keeps running and writes every
//! event to the secondary output instead. The event log never takes the
//! process down.

pub mod config;
pub mod error;
pub mod event_log;
pub mod writer;

pub use config::EventLogConfig;
pub use error::{EventLogError, EventLogResult};
pub use event_log::EventLog;
pub use writer::EventWriter;
