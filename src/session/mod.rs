//! Presentation state: which frame is visible, and trigger highlighting
//!
//! - [`state`]: the [`Session`] state owner and its event entry points
//! - [`gesture`]: the [`DoubleTap`] keyboard gesture detector
//!
//! The session is deliberately free of any rendering concern: it consumes
//! already-classified input events (keydown, pointer move, click) plus a
//! monotonic `Instant`, so every transition is testable without a terminal.

pub mod gesture;
pub mod state;

pub use gesture::{DoubleTap, TAP_LATENCY};
pub use state::Session;
