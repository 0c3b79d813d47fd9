//! Line parser for the `.stage` declaration format
//!
//! The format is line-oriented: each non-blank, non-comment line is one
//! directive. A tiny scanner splits a line into bare words, quoted strings,
//! and commas; the parser then matches on the leading keyword.
//!
//! ```text
//! prototype start
//!
//! frame start
//!     text "Welcome"
//!     trigger end "Finish the tour" on click, hover
//! end
//! ```

use crate::prototype::{FrameDecl, Node, Prototype, SourceLocation, TriggerAction, TriggerDecl};
use std::fmt;

/// Parser error with the offending source position
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        ParseError {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// One token on a directive line
#[derive(Debug, Clone, PartialEq)]
enum Tok {
    /// Bare word: keywords and identifiers
    Word(String),
    /// Double-quoted string with `\"`, `\\` and `\n` escapes
    Str(String),
    Comma,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Word(w) => write!(f, "'{}'", w),
            Tok::Str(_) => write!(f, "quoted text"),
            Tok::Comma => write!(f, "','"),
        }
    }
}

#[derive(Debug, Clone)]
struct Spanned {
    tok: Tok,
    location: SourceLocation,
}

/// Parser for a whole `.stage` document
pub struct Parser<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

/// Parse a `.stage` source into a [`Prototype`]
pub fn parse(source: &str) -> Result<Prototype, ParseError> {
    Parser::new(source).parse_prototype()
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            lines: source.lines(),
            line_no: 0,
        }
    }

    /// Parse the whole document
    pub fn parse_prototype(&mut self) -> Result<Prototype, ParseError> {
        let mut initial: Option<String> = None;
        let mut frames: Vec<FrameDecl> = Vec::new();
        // The frame currently being filled, with its declaration site
        let mut open: Option<FrameDecl> = None;

        for line in self.lines.by_ref() {
            self.line_no += 1;
            let tokens = scan_line(line, self.line_no)?;
            let Some(head) = tokens.first() else {
                continue;
            };
            let keyword = match &head.tok {
                Tok::Word(w) => w.as_str(),
                other => {
                    return Err(ParseError::new(
                        format!("Expected a keyword, found {}", other),
                        head.location,
                    ));
                }
            };

            match keyword {
                "prototype" => {
                    if initial.is_some() {
                        return Err(ParseError::new(
                            "Duplicate 'prototype' directive",
                            head.location,
                        ));
                    }
                    if open.is_some() || !frames.is_empty() {
                        return Err(ParseError::new(
                            "'prototype' must appear before any frame",
                            head.location,
                        ));
                    }
                    let id = expect_word(&tokens, 1, "starting frame identifier", head.location)?;
                    expect_end_of_line(&tokens, 2)?;
                    initial = Some(id);
                }
                "frame" => {
                    if let Some(frame) = &open {
                        return Err(ParseError::new(
                            format!("Frame '{}' is still open; frames do not nest", frame.id),
                            head.location,
                        ));
                    }
                    let id = expect_word(&tokens, 1, "frame identifier", head.location)?;
                    expect_end_of_line(&tokens, 2)?;
                    open = Some(FrameDecl {
                        id,
                        content: Vec::new(),
                        location: head.location,
                    });
                }
                "end" => {
                    expect_end_of_line(&tokens, 1)?;
                    match open.take() {
                        Some(frame) => frames.push(frame),
                        None => {
                            return Err(ParseError::new(
                                "'end' without an open frame",
                                head.location,
                            ));
                        }
                    }
                }
                "text" => {
                    let Some(frame) = open.as_mut() else {
                        return Err(ParseError::new(
                            "'text' is only allowed inside a frame",
                            head.location,
                        ));
                    };
                    let content = expect_str(&tokens, 1, "quoted text", head.location)?;
                    expect_end_of_line(&tokens, 2)?;
                    frame.content.push(Node::Text(content));
                }
                "trigger" => {
                    let Some(frame) = open.as_mut() else {
                        return Err(ParseError::new(
                            "'trigger' is only allowed inside a frame",
                            head.location,
                        ));
                    };
                    let trigger = parse_trigger(&tokens, head.location)?;
                    frame.content.push(Node::Trigger(trigger));
                }
                other => {
                    return Err(ParseError::new(
                        format!("Unknown keyword '{}'", other),
                        head.location,
                    ));
                }
            }
        }

        if let Some(frame) = open {
            return Err(ParseError::new(
                format!("Frame '{}' is never closed", frame.id),
                frame.location,
            ));
        }

        Ok(Prototype::new(initial.unwrap_or_default(), frames))
    }
}

/// Parse `trigger <target> "<label>" [on <action>[, <action>…]]`
fn parse_trigger(tokens: &[Spanned], at: SourceLocation) -> Result<TriggerDecl, ParseError> {
    let target = expect_word(tokens, 1, "target frame identifier", at)?;
    let label = expect_str(tokens, 2, "quoted trigger label", at)?;

    let mut actions = Vec::new();
    let mut pos = 3;
    if pos < tokens.len() {
        match &tokens[pos].tok {
            Tok::Word(w) if w == "on" => pos += 1,
            other => {
                return Err(ParseError::new(
                    format!("Expected 'on' or end of line, found {}", other),
                    tokens[pos].location,
                ));
            }
        }
        loop {
            let word = expect_word(tokens, pos, "activation gesture", at)?;
            match TriggerAction::from_keyword(&word) {
                Some(action) => actions.push(action),
                None => {
                    return Err(ParseError::new(
                        format!(
                            "Unknown gesture '{}' (expected click, hover, press, enter or leave)",
                            word
                        ),
                        tokens[pos].location,
                    ));
                }
            }
            pos += 1;
            match tokens.get(pos) {
                None => break,
                Some(t) if t.tok == Tok::Comma => pos += 1,
                Some(t) => {
                    return Err(ParseError::new(
                        format!("Expected ',' or end of line, found {}", t.tok),
                        t.location,
                    ));
                }
            }
        }
    }

    if actions.is_empty() {
        actions.push(TriggerAction::Click);
    }

    Ok(TriggerDecl {
        target,
        label,
        actions,
        location: at,
    })
}

fn expect_word(
    tokens: &[Spanned],
    pos: usize,
    what: &str,
    at: SourceLocation,
) -> Result<String, ParseError> {
    match tokens.get(pos) {
        Some(Spanned {
            tok: Tok::Word(w), ..
        }) => Ok(w.clone()),
        Some(t) => Err(ParseError::new(
            format!("Expected {}, found {}", what, t.tok),
            t.location,
        )),
        None => Err(ParseError::new(format!("Expected {}", what), at)),
    }
}

fn expect_str(
    tokens: &[Spanned],
    pos: usize,
    what: &str,
    at: SourceLocation,
) -> Result<String, ParseError> {
    match tokens.get(pos) {
        Some(Spanned {
            tok: Tok::Str(s), ..
        }) => Ok(s.clone()),
        Some(t) => Err(ParseError::new(
            format!("Expected {}, found {}", what, t.tok),
            t.location,
        )),
        None => Err(ParseError::new(format!("Expected {}", what), at)),
    }
}

fn expect_end_of_line(tokens: &[Spanned], pos: usize) -> Result<(), ParseError> {
    match tokens.get(pos) {
        None => Ok(()),
        Some(t) => Err(ParseError::new(
            format!("Unexpected {} after complete directive", t.tok),
            t.location,
        )),
    }
}

/// Split one line into tokens; `#` starts a comment outside quotes
fn scan_line(line: &str, line_no: usize) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let column = i + 1;

        if c.is_whitespace() {
            i += 1;
        } else if c == '#' {
            break;
        } else if c == ',' {
            tokens.push(Spanned {
                tok: Tok::Comma,
                location: SourceLocation::new(line_no, column),
            });
            i += 1;
        } else if c == '"' {
            let mut text = String::new();
            i += 1;
            loop {
                match chars.get(i) {
                    None => {
                        return Err(ParseError::new(
                            "Unterminated string",
                            SourceLocation::new(line_no, column),
                        ));
                    }
                    Some('"') => {
                        i += 1;
                        break;
                    }
                    Some('\\') => {
                        match chars.get(i + 1) {
                            Some('"') => text.push('"'),
                            Some('\\') => text.push('\\'),
                            Some('n') => text.push('\n'),
                            Some(other) => {
                                text.push('\\');
                                text.push(*other);
                            }
                            None => {
                                return Err(ParseError::new(
                                    "Unterminated string",
                                    SourceLocation::new(line_no, column),
                                ));
                            }
                        }
                        i += 2;
                    }
                    Some(other) => {
                        text.push(*other);
                        i += 1;
                    }
                }
            }
            tokens.push(Spanned {
                tok: Tok::Str(text),
                location: SourceLocation::new(line_no, column),
            });
        } else {
            let start = i;
            while i < chars.len() {
                let c = chars[i];
                if c.is_whitespace() || c == ',' || c == '"' || c == '#' {
                    break;
                }
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            tokens.push(Spanned {
                tok: Tok::Word(word),
                location: SourceLocation::new(line_no, start + 1),
            });
        }
    }

    Ok(tokens)
}
