use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub text: Color,              // Frame body text
    pub frame_title: Color,       // Frame id in the pane title
    pub frame_border: Color,
    pub trigger_label: Color,
    pub trigger_border: Color,    // Resting trigger outline
    pub trigger_hover: Color,     // Outline while the pointer is inside
    pub trigger_highlight: Color, // Outline while discovery highlight is on
    pub blank_hint: Color,        // Hint text when no frame matches
    pub status_text: Color,
    pub status_accent: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    text: Color::Rgb(205, 214, 244),
    frame_title: Color::Rgb(137, 180, 250),       // Blue
    frame_border: Color::Rgb(108, 112, 134),      // Grey
    trigger_label: Color::Rgb(205, 214, 244),
    trigger_border: Color::Rgb(137, 180, 250),    // Blue
    trigger_hover: Color::Rgb(250, 179, 135),     // Orange
    trigger_highlight: Color::Rgb(249, 226, 175), // Yellow sweep for discovery
    blank_hint: Color::Rgb(108, 112, 134),
    status_text: Color::Rgb(205, 214, 244),
    status_accent: Color::Rgb(166, 227, 161),     // Green
};
