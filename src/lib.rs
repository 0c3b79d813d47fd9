//! # Introduction
//!
//! protostage plays clickable design prototypes in the terminal.  A prototype
//! is a set of named frames holding text and triggers; clicking a trigger
//! switches the visible frame.  Double-tapping any key briefly highlights
//! every trigger on screen so the viewer can find the clickable regions, and
//! Escape (while highlighted) resets the prototype to its starting frame.
//! The UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! .stage source → Parser → Prototype → Session ⇄ TUI
//! ```
//!
//! 1. [`parser`] — parses the line-oriented `.stage` declaration format.
//! 2. [`prototype`] — the static document model: [`prototype::Prototype`],
//!    [`prototype::FrameDecl`], [`prototype::TriggerDecl`].
//! 3. [`session`] — the presentation state machine: which frame is selected,
//!    whether triggers are highlighted, and the double-tap gesture detector.
//! 4. [`ui`] — ratatui-based player; not part of the stable library API.
//!
//! ## Declaration format
//!
//! ```text
//! prototype start
//!
//! frame start
//!     text "Welcome"
//!     trigger end "Finish the tour"
//! end
//! ```
//!
//! Switching to an identifier no frame declares is valid and shows a blank
//! stage; prototyping against not-yet-declared frames is expected use.

pub mod parser;
pub mod prototype;
pub mod session;
pub mod ui;
