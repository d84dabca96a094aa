//! In-memory state for the microblog.
//!
//! The [`Store`] is the single consistency domain of the system. One
//! reader/writer lock covers the user map, the username index, the ordered
//! post sequence, and both identity sequences together, so every mutation is
//! totally ordered and every read sees a state as of the last released
//! write section.
//!
//! # Design Rules
//!
//! 1. Users are never mutated or removed once inserted.
//! 2. Posts are append-only; display order is insertion order.
//! 3. A post's liker set only grows and never holds the same user twice.
//! 4. Ordinals are issued from two independent counters, strictly
//!    increasing and never reused.
//! 5. Nothing outside [`StoreState`] touches the collections directly.

pub mod error;
pub mod state;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use state::StoreState;
pub use store::Store;
