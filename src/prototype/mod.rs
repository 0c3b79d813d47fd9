//! The prototype document model
//!
//! A [`Prototype`] is the static declaration a host supplies: a starting
//! frame identifier plus a list of [`FrameDecl`]s, each holding text and
//! [`TriggerDecl`] content. The [`crate::session`] module owns which frame is
//! currently visible; this module only answers "what is declared".

pub mod decl;

pub use decl::{FrameDecl, Node, Prototype, SourceLocation, TriggerAction, TriggerDecl};
