//! Bounded single-consumer work queues.
//!
//! A [`Pipeline`] owns one bounded channel and exactly one background task
//! that drains it in submission order, handing each item to a [`Handler`].
//! Producers only ever get the sending side. Both the like pipeline and the
//! event log are instances of this one type.
//!
//! # Guarantees
//!
//! 1. Items are handled strictly in the order their submission completed.
//! 2. Submission waits for free capacity instead of failing (backpressure).
//! 3. A handler error is logged by the worker and never stops it.
//! 4. [`Pipeline::close`] stops intake, then waits until every item that was
//!    already accepted has been handled.

pub mod config;
pub mod error;
pub mod handler;
pub mod pipeline;

pub use config::{PipelineConfig, DEFAULT_CAPACITY};
pub use error::{PipelineError, PipelineResult};
pub use handler::{FnHandler, Handler};
pub use pipeline::Pipeline;
