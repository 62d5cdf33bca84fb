//! Infrastructure layer - the in-memory store and the simulated network.
//!
//! Nothing here touches the outside world; the "network" is a timer and the
//! "database" is a vector. The point is that callers cannot tell from the
//! call contract.

mod entities;
pub mod latency;
pub mod store;

pub use latency::{defer, Latency};
pub use store::{Entity, MemoryStore};
