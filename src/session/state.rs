//! The session state machine
//!
//! A [`Session`] owns the two pieces of presentation state: the currently
//! selected frame identifier and the transient trigger-highlight flag. The
//! view layer holds the session by reference and routes input events into the
//! entry points below; nothing else mutates the state.
//!
//! Two identifiers are remembered besides the live one:
//!
//! - `origin` — the identifier the session was constructed with. Pressing
//!   Escape while highlighted resets the frame to this value, even if the
//!   host has since supplied a different starting identifier.
//! - `configured` — the most recent host-supplied starting identifier, used
//!   by [`Session::sync_initial`] to detect an external override.

use crossterm::event::KeyCode;
use std::time::Instant;

use super::gesture::DoubleTap;

pub struct Session {
    frame: String,
    highlighted: bool,
    origin: String,
    configured: String,
    gesture: DoubleTap,
}

impl Session {
    /// Create a session starting at `initial` (empty = no frame selected)
    pub fn new(initial: &str) -> Self {
        Session {
            frame: initial.to_string(),
            highlighted: false,
            origin: initial.to_string(),
            configured: initial.to_string(),
            gesture: DoubleTap::new(),
        }
    }

    /// The currently selected frame identifier
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Whether triggers are currently highlighted
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Select a frame. Total: an identifier no frame declares is accepted
    /// and simply leaves nothing visible.
    pub fn set_frame(&mut self, id: &str) {
        self.frame = id.to_string();
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Trigger activation: unconditionally switch to `target`
    pub fn activate(&mut self, target: &str) {
        self.set_frame(target);
    }

    /// Host-supplied starting identifier changed
    ///
    /// Compared by value against the previously supplied one; on change the
    /// current frame follows it immediately. This is an external override,
    /// not a user transition: the highlight flag and the Escape reset target
    /// are left alone.
    pub fn sync_initial(&mut self, initial: &str) {
        if initial != self.configured {
            self.configured = initial.to_string();
            self.frame = initial.to_string();
        }
    }

    /// Document-level keydown
    ///
    /// While highlighted, Escape leaves the highlight and resets the frame to
    /// the construction-time identifier. Every key, Escape included, also
    /// counts toward the double-tap gesture; the second tap within the quiet
    /// window turns the highlight on.
    pub fn key_down(&mut self, key: KeyCode, now: Instant) {
        if self.highlighted && key == KeyCode::Esc {
            self.highlighted = false;
            self.frame = self.origin.clone();
        }

        if self.gesture.key_down(now) {
            self.highlighted = true;
        }
    }

    /// Document-level pointer movement: leaves the highlight, keeps the frame
    pub fn pointer_moved(&mut self, _now: Instant) {
        if self.highlighted {
            self.highlighted = false;
        }
    }

    /// Document-level click anywhere: leaves the highlight, keeps the frame
    pub fn clicked(&mut self, _now: Instant) {
        if self.highlighted {
            self.highlighted = false;
        }
    }

    /// Advance the gesture clock; called from the event loop each iteration
    pub fn tick(&mut self, now: Instant) {
        self.gesture.tick(now);
    }

    /// Whether document-level pointer activity should be routed here
    ///
    /// True exactly while highlighted; outside that state the session has no
    /// pointer listeners registered.
    pub fn wants_pointer_activity(&self) -> bool {
        self.highlighted
    }

    /// Whether a first tap is pending (the gesture window timer is armed)
    pub fn gesture_armed(&self) -> bool {
        self.gesture.is_armed()
    }
}
