//! Rendering logic for the player panes
//!
//! All functions here are stateless renderers: they read the prototype and
//! session, draw into the frame, and report the screen rectangles of the
//! triggers they drew so the app can hit-test pointer events against them.

use crate::prototype::{FrameDecl, Node, Prototype};
use crate::session::Session;
use crate::ui::app::TriggerZone;
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Rows a content node occupies: one for text, three for a bordered trigger
fn node_height(node: &Node) -> u16 {
    match node {
        Node::Text(_) => 1,
        Node::Trigger(_) => 3,
    }
}

fn frame_height(decl: &FrameDecl) -> u16 {
    let content: u16 = decl.content.iter().map(node_height).sum();
    // Borders plus at least one content row
    content.max(1) + 2
}

/// Render every frame matching the session's current identifier
///
/// Matching frames stack top to bottom in declaration order. Zero matches is
/// the designed blank state and renders a dim hint instead of an error.
/// Trigger rectangles are appended to `zones` in render order.
pub fn render_stage(
    frame: &mut Frame,
    area: Rect,
    prototype: &Prototype,
    session: &Session,
    hovered: Option<usize>,
    zones: &mut Vec<TriggerZone>,
) {
    let visible = prototype.visible_frames(session.frame());

    if visible.is_empty() {
        render_blank(frame, area, session.frame());
        return;
    }

    let mut y = area.y;
    for decl in visible {
        if y >= area.y + area.height {
            break;
        }
        let height = frame_height(decl).min(area.y + area.height - y);
        let slot = Rect::new(area.x, y, area.width, height);
        render_frame_block(frame, slot, decl, session, hovered, zones);
        y += height;
    }
}

/// The empty stage: no declared frame matches the current identifier
fn render_blank(frame: &mut Frame, area: Rect, current: &str) {
    let hint = if current.is_empty() {
        "No frame selected".to_string()
    } else {
        format!("No frame named '{}'", current)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.frame_border))
        .padding(Padding::new(1, 1, area.height.saturating_sub(3) / 2, 0));
    let paragraph = Paragraph::new(hint)
        .style(Style::default().fg(DEFAULT_THEME.blank_hint))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// One frame: a titled block holding its text and trigger nodes
fn render_frame_block(
    frame: &mut Frame,
    area: Rect,
    decl: &FrameDecl,
    session: &Session,
    hovered: Option<usize>,
    zones: &mut Vec<TriggerZone>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.frame_border))
        .title(Span::styled(
            format!(" {} ", decl.id),
            Style::default()
                .fg(DEFAULT_THEME.frame_title)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for node in &decl.content {
        if y >= inner.y + inner.height {
            break;
        }
        match node {
            Node::Text(text) => {
                let row = Rect::new(inner.x, y, inner.width, 1);
                let paragraph =
                    Paragraph::new(text.as_str()).style(Style::default().fg(DEFAULT_THEME.text));
                frame.render_widget(paragraph, row);
                y += 1;
            }
            Node::Trigger(trigger) => {
                let height = (inner.y + inner.height - y).min(3);
                let label_width = trigger.label.chars().count() as u16 + 4;
                let rect = Rect::new(inner.x, y, label_width.min(inner.width), height);

                // Discovery highlight wins over hover, hover over resting
                let border = if session.highlighted() {
                    DEFAULT_THEME.trigger_highlight
                } else if hovered == Some(zones.len()) {
                    DEFAULT_THEME.trigger_hover
                } else {
                    DEFAULT_THEME.trigger_border
                };

                let button = Paragraph::new(trigger.label.as_str())
                    .style(Style::default().fg(DEFAULT_THEME.trigger_label))
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(border)),
                    );
                frame.render_widget(button, rect);

                zones.push(TriggerZone {
                    area: rect,
                    target: trigger.target.clone(),
                    actions: trigger.actions.clone(),
                });
                y += height;
            }
        }
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session, message: &str) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.bg);

    // Left side: current frame, highlight indicator, status message
    let frame_label = if session.frame().is_empty() {
        "(none)".to_string()
    } else {
        session.frame().to_string()
    };
    let mut left_spans = vec![Span::styled(
        format!(" {} ", frame_label),
        Style::default()
            .bg(DEFAULT_THEME.frame_title)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];
    if session.highlighted() {
        left_spans.push(Span::styled(
            " TRIGGERS ",
            Style::default()
                .bg(DEFAULT_THEME.trigger_highlight)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    left_spans.push(Span::styled(
        format!(" {} ", message),
        bar_bg.fg(DEFAULT_THEME.status_text),
    ));

    let left = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: keybinds
    let key_style = Style::default()
        .bg(DEFAULT_THEME.status_accent)
        .fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.status_text);

    let right_spans = vec![
        Span::styled(" any key ×2 ", key_style),
        Span::styled(" reveal triggers  ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" reset  ", desc_style),
        Span::styled(" ctrl+q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
