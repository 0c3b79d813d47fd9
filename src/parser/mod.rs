//! `.stage` declaration parser
//!
//! This module turns a `.stage` source text into a
//! [`Prototype`](crate::prototype::Prototype):
//! - [`parse`]: line scanning and directive parsing in one pass
//!
//! # Format
//!
//! A document is a sequence of directives, one per line:
//! - `prototype <id>` — the starting frame (optional, at most once, first)
//! - `frame <id>` … `end` — a named frame; duplicate ids are allowed
//! - `text "<content>"` — a text line inside a frame
//! - `trigger <target> "<label>" [on <gesture>, …]` — a clickable region
//!
//! `#` starts a comment; blank lines are skipped. Hand-written line parser,
//! no external parser dependencies.

pub mod parse;

pub use parse::{ParseError, Parser, parse};
