// State machine tests for the session: frame selection, gesture timing,
// highlight entry/exit.

use crossterm::event::KeyCode;
use protostage::session::Session;
use std::time::{Duration, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_starts_at_initial_frame() {
    let session = Session::new("start");
    assert_eq!(session.frame(), "start");
    assert!(!session.highlighted());
}

#[test]
fn test_default_empty_initial() {
    let session = Session::new("");
    assert_eq!(session.frame(), "");
}

#[test]
fn test_activate_switches_frame() {
    let mut session = Session::new("start");
    session.activate("end");
    assert_eq!(session.frame(), "end");
}

#[test]
fn test_activate_unknown_target_is_accepted() {
    // Switching to an identifier no frame declares is valid (blank stage)
    let mut session = Session::new("start");
    session.activate("no-such-frame");
    assert_eq!(session.frame(), "no-such-frame");
    assert!(!session.highlighted());
}

#[test]
fn test_activate_is_idempotent() {
    let mut session = Session::new("start");
    session.activate("start");
    assert_eq!(session.frame(), "start");
    assert!(!session.highlighted());
}

#[test]
fn test_double_tap_highlights() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    assert!(!session.highlighted());
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.highlighted());
    // The frame is untouched by the gesture
    assert_eq!(session.frame(), "start");
}

#[test]
fn test_double_tap_counts_any_key() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Tab, t0);
    session.key_down(KeyCode::Char('z'), t0 + ms(50));
    assert!(session.highlighted());
}

#[test]
fn test_slow_taps_do_not_highlight() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(400));
    assert!(!session.highlighted());
}

#[test]
fn test_tick_expires_gesture_window() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    assert!(session.gesture_armed());
    session.tick(t0 + ms(400));
    assert!(!session.gesture_armed());
    session.key_down(KeyCode::Char('a'), t0 + ms(450));
    assert!(!session.highlighted());
}

#[test]
fn test_escape_exits_highlight_and_resets_frame() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.activate("end");
    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.highlighted());
    assert_eq!(session.frame(), "end");

    session.key_down(KeyCode::Esc, t0 + ms(1000));
    assert!(!session.highlighted());
    assert_eq!(session.frame(), "start");
}

#[test]
fn test_escape_resets_to_construction_time_initial() {
    // sync_initial moves the configured value, but the Escape reset target
    // stays at the identifier the session was created with
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.sync_initial("elsewhere");
    assert_eq!(session.frame(), "elsewhere");

    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    session.key_down(KeyCode::Esc, t0 + ms(1000));

    assert_eq!(session.frame(), "start");
    assert!(!session.highlighted());
}

#[test]
fn test_escape_without_highlight_only_counts_as_tap() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.activate("end");
    session.key_down(KeyCode::Esc, t0);
    assert_eq!(session.frame(), "end");
    assert!(!session.highlighted());
}

#[test]
fn test_double_escape_re_enters_highlight_after_reset() {
    // While highlighted, the first Escape exits and resets; both Escapes
    // still feed the tap counter, so the pair turns the highlight back on.
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.activate("end");
    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(50));
    assert!(session.highlighted());

    session.key_down(KeyCode::Esc, t0 + ms(1000));
    assert!(!session.highlighted());
    assert_eq!(session.frame(), "start");

    session.key_down(KeyCode::Esc, t0 + ms(1050));
    assert!(session.highlighted());
    assert_eq!(session.frame(), "start");
}

#[test]
fn test_pointer_move_exits_highlight_keeps_frame() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.activate("end");
    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.highlighted());

    session.pointer_moved(t0 + ms(200));
    assert!(!session.highlighted());
    assert_eq!(session.frame(), "end");
}

#[test]
fn test_click_exits_highlight_keeps_frame() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.highlighted());

    session.clicked(t0 + ms(200));
    assert!(!session.highlighted());
    assert_eq!(session.frame(), "start");
}

#[test]
fn test_pointer_activity_is_ignored_while_idle() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    assert!(!session.wants_pointer_activity());
    session.pointer_moved(t0);
    session.clicked(t0);
    assert_eq!(session.frame(), "start");
    assert!(!session.highlighted());
}

#[test]
fn test_wants_pointer_activity_tracks_highlight() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.wants_pointer_activity());

    session.pointer_moved(t0 + ms(200));
    assert!(!session.wants_pointer_activity());
}

#[test]
fn test_sync_initial_overrides_current_frame() {
    let mut session = Session::new("start");
    session.activate("end");

    session.sync_initial("intro");
    assert_eq!(session.frame(), "intro");
}

#[test]
fn test_sync_initial_same_value_is_a_no_op() {
    // Re-supplying an unchanged starting identifier must not yank the
    // session away from a frame the user navigated to
    let mut session = Session::new("start");
    session.activate("end");

    session.sync_initial("start");
    assert_eq!(session.frame(), "end");
}

#[test]
fn test_sync_initial_does_not_touch_highlight() {
    let mut session = Session::new("start");
    let t0 = Instant::now();

    session.key_down(KeyCode::Char('a'), t0);
    session.key_down(KeyCode::Char('a'), t0 + ms(100));
    assert!(session.highlighted());

    session.sync_initial("elsewhere");
    assert!(session.highlighted());
    assert_eq!(session.frame(), "elsewhere");
}

#[test]
fn test_setters_are_direct() {
    let mut session = Session::new("start");

    session.set_frame("other");
    assert_eq!(session.frame(), "other");

    session.set_highlighted(true);
    assert!(session.highlighted());
    session.set_highlighted(false);
    assert!(!session.highlighted());
}
