// Integration tests driving a parsed prototype through the session,
// the same way the player's trigger bindings do.

use crossterm::event::KeyCode;
use protostage::parser;
use protostage::prototype::{Node, Prototype, TriggerAction};
use protostage::session::Session;
use std::time::{Duration, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Ids of the frames currently visible, in declaration order
fn visible_ids(prototype: &Prototype, session: &Session) -> Vec<String> {
    prototype
        .visible_frames(session.frame())
        .iter()
        .map(|f| f.id.clone())
        .collect()
}

/// Activate the first trigger found inside the currently visible frames,
/// mirroring what a click on that trigger does
fn click_first_trigger(prototype: &Prototype, session: &mut Session) -> String {
    let target = prototype
        .visible_frames(session.frame())
        .iter()
        .flat_map(|f| f.triggers())
        .map(|t| t.target.clone())
        .next()
        .expect("No trigger visible");
    session.activate(&target);
    target
}

#[test]
fn test_end_to_end_tour() {
    let source = r#"
        prototype start

        frame start
            text "Hello"
            trigger end "Finish"
        end

        frame end
            text "Done"
            trigger start "Restart"
        end
    "#;
    let prototype = parser::parse(source).expect("Parsing failed");
    let mut session = Session::new(prototype.initial());

    // Initial render: only the start frame is visible
    assert_eq!(visible_ids(&prototype, &session), vec!["start"]);

    // Click the trigger inside the start frame
    let target = click_first_trigger(&prototype, &mut session);
    assert_eq!(target, "end");
    assert_eq!(visible_ids(&prototype, &session), vec!["end"]);

    // Double-tap any key: triggers highlight, the frame stays put
    let t0 = Instant::now();
    session.key_down(KeyCode::Char('x'), t0);
    session.key_down(KeyCode::Char('x'), t0 + ms(100));
    assert!(session.highlighted());
    assert_eq!(visible_ids(&prototype, &session), vec!["end"]);

    // Escape: highlight clears and the start frame is selected again
    session.key_down(KeyCode::Esc, t0 + ms(1000));
    assert!(!session.highlighted());
    assert_eq!(visible_ids(&prototype, &session), vec!["start"]);
}

#[test]
fn test_exactly_matching_frames_render() {
    let source = "frame a\nend\nframe b\nend\nframe c\nend\n";
    let prototype = parser::parse(source).expect("Parsing failed");
    let mut session = Session::new("a");

    assert_eq!(visible_ids(&prototype, &session), vec!["a"]);
    session.activate("c");
    assert_eq!(visible_ids(&prototype, &session), vec!["c"]);
}

#[test]
fn test_undeclared_identifier_renders_blank() {
    let source = "frame a\nend\n";
    let prototype = parser::parse(source).expect("Parsing failed");
    let mut session = Session::new("a");

    session.activate("typo");
    assert!(visible_ids(&prototype, &session).is_empty());
    assert!(!prototype.is_declared("typo"));

    // Navigating back out of the blank state still works
    session.activate("a");
    assert_eq!(visible_ids(&prototype, &session), vec!["a"]);
}

#[test]
fn test_duplicate_frame_ids_all_render() {
    let source = "frame a\n text \"first\"\nend\nframe a\n text \"second\"\nend\n";
    let prototype = parser::parse(source).expect("Parsing failed");
    let session = Session::new("a");

    let visible = prototype.visible_frames(session.frame());
    assert_eq!(visible.len(), 2);
    match (&visible[0].content[0], &visible[1].content[0]) {
        (Node::Text(first), Node::Text(second)) => {
            assert_eq!(first, "first");
            assert_eq!(second, "second");
        }
        _ => panic!("Expected text content"),
    }
}

#[test]
fn test_empty_initial_shows_nothing() {
    let source = "frame a\nend\n";
    let prototype = parser::parse(source).expect("Parsing failed");
    let session = Session::new(prototype.initial());

    assert_eq!(session.frame(), "");
    assert!(visible_ids(&prototype, &session).is_empty());
}

#[test]
fn test_trigger_to_undeclared_frame_then_recovery() {
    let source = r#"
        prototype a

        frame a
            trigger missing "Broken link"
        end
    "#;
    let prototype = parser::parse(source).expect("Parsing failed");
    let mut session = Session::new(prototype.initial());

    click_first_trigger(&prototype, &mut session);
    assert!(visible_ids(&prototype, &session).is_empty());

    // The host can still force the session back via a configuration change
    session.sync_initial("a");
    assert_eq!(visible_ids(&prototype, &session), vec!["a"]);
}

#[test]
fn test_bundled_tour_parses() {
    let source = include_str!("../demos/tour.stage");
    let prototype = parser::parse(source).expect("Parsing failed");

    assert_eq!(prototype.initial(), "welcome");
    assert_eq!(prototype.frames().len(), 3);
    assert!(prototype.is_declared("gestures"));

    // The gestures frame demonstrates a hover trigger
    let gestures = &prototype.visible_frames("gestures")[0];
    let hover = gestures.triggers().next().expect("No trigger");
    assert!(hover.activates_on(TriggerAction::Hover));
    assert!(!hover.activates_on(TriggerAction::Click));
}
