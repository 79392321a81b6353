//! Core traits that decouple the driver from platform services.
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing

pub mod sync;
pub mod time;

pub use sync::{CriticalSectionState, MockState, SharedState};
pub use time::{MockTime, TimeSource};
