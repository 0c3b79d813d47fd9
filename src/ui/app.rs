//! Main TUI application state and logic

use crate::prototype::{Prototype, TriggerAction};
use crate::session::Session;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
};
use std::io;
use std::time::{Duration, Instant};

/// Screen rectangle of a rendered trigger, rebuilt on every draw
#[derive(Debug, Clone)]
pub struct TriggerZone {
    pub area: Rect,
    pub target: String,
    pub actions: Vec<TriggerAction>,
}

impl TriggerZone {
    fn activates_on(&self, action: TriggerAction) -> bool {
        self.actions.contains(&action)
    }
}

/// The main application state
pub struct App {
    /// The prototype document being played
    pub prototype: Prototype,

    /// Frame/highlight state owner
    pub session: Session,

    /// Trigger rectangles from the most recent draw, in render order
    pub zones: Vec<TriggerZone>,

    /// Zone index the pointer is currently inside
    pub hovered: Option<usize>,

    /// Zone index where the last mouse-down landed
    pub pressed: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a player for the given prototype, starting at its initial frame
    pub fn new(prototype: Prototype) -> Self {
        let session = Session::new(prototype.initial());
        App {
            prototype,
            session,
            zones: Vec::new(),
            hovered: None,
            pressed: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with timeout so the gesture window can expire between events
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key_event(key);
                        }
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                    }
                    _ => {}
                }
            }

            self.session.tick(Instant::now());
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        // Stage on top, single-row status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        self.zones.clear();
        super::panes::render_stage(
            frame,
            chunks[0],
            &self.prototype,
            &self.session,
            self.hovered,
            &mut self.zones,
        );

        super::panes::render_status_bar(frame, chunks[1], &self.session, &self.status_message);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        let was_highlighted = self.session.highlighted();
        self.session.key_down(key.code, Instant::now());

        if self.session.highlighted() && !was_highlighted {
            self.status_message = "Triggers revealed".to_string();
        } else if was_highlighted && !self.session.highlighted() {
            // Escape: highlight left and the frame went back to the start
            self.status_message = "Back to the start".to_string();
        }
    }

    /// Handle mouse events: document-level activity plus trigger hit-testing
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let now = Instant::now();

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.session.wants_pointer_activity() {
                    self.session.pointer_moved(now);
                }
                self.track_hover(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = self.zone_at(mouse.column, mouse.row);
                if let Some(i) = self.pressed {
                    if self.zones[i].activates_on(TriggerAction::Press) {
                        self.activate_zone(i);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.session.wants_pointer_activity() {
                    self.session.clicked(now);
                }
                let released = self.zone_at(mouse.column, mouse.row);
                if let (Some(i), Some(j)) = (self.pressed, released) {
                    if i == j && self.zones[i].activates_on(TriggerAction::Click) {
                        self.activate_zone(i);
                    }
                }
                self.pressed = None;
            }
            _ => {}
        }
    }

    /// Update the hovered zone, firing enter/leave/hover gestures on the way
    fn track_hover(&mut self, column: u16, row: u16) {
        let hit = self.zone_at(column, row);
        if hit == self.hovered {
            return;
        }

        if let Some(i) = self.hovered {
            if i < self.zones.len() && self.zones[i].activates_on(TriggerAction::PointerLeave) {
                self.activate_zone(i);
                self.hovered = None;
                return;
            }
        }

        self.hovered = hit;
        if let Some(i) = hit {
            if self.zones[i].activates_on(TriggerAction::PointerEnter)
                || self.zones[i].activates_on(TriggerAction::Hover)
            {
                self.activate_zone(i);
            }
        }
    }

    /// Topmost zone containing the given cell
    fn zone_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.zones.iter().position(|zone| zone.area.contains(position))
    }

    /// Fire a trigger: switch the session to its target frame
    ///
    /// The zone list is stale once the frame changes, so pointer bookkeeping
    /// is dropped until the next draw rebuilds it.
    fn activate_zone(&mut self, index: usize) {
        let target = self.zones[index].target.clone();
        self.session.activate(&target);
        self.status_message = if self.prototype.is_declared(&target) {
            format!("Switched to '{}'", target)
        } else {
            format!("Switched to '{}' (no frame declares it)", target)
        };
        self.hovered = None;
        self.pressed = None;
    }
}
