//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for seal/open calls.
//!
//! Notes:
//! - Snapshots are immutable so they can be logged or serialized as-is.
//! - Key derivation is expected to dominate `Stage::DeriveKey`; a sudden drop
//!   there usually means someone lowered the iteration count.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
