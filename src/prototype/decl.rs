//! Declaration types for a prototype document
//!
//! These are plain data: the parser produces them and the session/UI layers
//! read them. Nothing here owns runtime state.

use rustc_hash::FxHashMap;
use std::fmt;

/// Line/column position in a declaration source, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Activation gestures a trigger responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    /// Pointer pressed and released inside the trigger
    Click,
    /// Pointer moving while inside the trigger
    Hover,
    /// Pointer pressed inside the trigger (fires on the down event)
    Press,
    /// Pointer entering the trigger region
    PointerEnter,
    /// Pointer leaving the trigger region
    PointerLeave,
}

impl TriggerAction {
    /// Parse a declaration-file keyword (`click`, `hover`, `press`, `enter`, `leave`)
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "click" => Some(TriggerAction::Click),
            "hover" => Some(TriggerAction::Hover),
            "press" => Some(TriggerAction::Press),
            "enter" => Some(TriggerAction::PointerEnter),
            "leave" => Some(TriggerAction::PointerLeave),
            _ => None,
        }
    }
}

/// A clickable region that switches the session to `target` when activated
#[derive(Debug, Clone)]
pub struct TriggerDecl {
    /// Frame identifier to switch to; not validated against declared frames
    pub target: String,
    /// Display text inside the trigger region
    pub label: String,
    /// Gestures that activate this trigger (never empty; `Click` by default)
    pub actions: Vec<TriggerAction>,
    pub location: SourceLocation,
}

impl TriggerDecl {
    /// Whether `action` is one of this trigger's activation gestures
    pub fn activates_on(&self, action: TriggerAction) -> bool {
        self.actions.contains(&action)
    }
}

/// One content line inside a frame
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Trigger(TriggerDecl),
}

/// A named view, shown only while it is the selected frame
#[derive(Debug, Clone)]
pub struct FrameDecl {
    pub id: String,
    pub content: Vec<Node>,
    pub location: SourceLocation,
}

impl FrameDecl {
    /// Iterate the triggers declared inside this frame, in order
    pub fn triggers(&self) -> impl Iterator<Item = &TriggerDecl> {
        self.content.iter().filter_map(|node| match node {
            Node::Trigger(trigger) => Some(trigger),
            Node::Text(_) => None,
        })
    }
}

/// A complete prototype document: the starting frame plus all declared frames
///
/// Duplicate frame ids are allowed; every frame whose id matches the selected
/// identifier is visible at once.
#[derive(Debug, Clone)]
pub struct Prototype {
    initial: String,
    frames: Vec<FrameDecl>,
    /// Frame id -> indices into `frames`, in declaration order
    index: FxHashMap<String, Vec<usize>>,
}

impl Prototype {
    pub fn new(initial: String, frames: Vec<FrameDecl>) -> Self {
        let mut index: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, frame) in frames.iter().enumerate() {
            index.entry(frame.id.clone()).or_default().push(i);
        }
        Prototype {
            initial,
            frames,
            index,
        }
    }

    /// The starting frame identifier (empty = no frame selected at start)
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// All declared frames, in declaration order
    pub fn frames(&self) -> &[FrameDecl] {
        &self.frames
    }

    /// Every frame whose id equals `current`, in declaration order
    ///
    /// An identifier with no match yields an empty slice: selecting an
    /// undeclared frame is valid and simply shows nothing.
    pub fn visible_frames(&self, current: &str) -> Vec<&FrameDecl> {
        match self.index.get(current) {
            Some(indices) => indices.iter().map(|&i| &self.frames[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Whether any frame declares this id
    pub fn is_declared(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}
