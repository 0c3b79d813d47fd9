//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard/mouse event loop, trigger
//!   hit-testing
//! - **[`panes`]** — stateless render functions for the stage (visible
//!   frames and their triggers) and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Prototype`] and call [`App::run`] to start the event loop.
//!
//! [`Prototype`]: crate::prototype::Prototype
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
