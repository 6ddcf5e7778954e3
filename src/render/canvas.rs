//! The drawing surface sub-renderers paint on.
//!
//! Coordinates are canvas pixels with y pointing down. Angles are compass
//! degrees: 0 is straight up and angles grow clockwise.

use std::fmt;

use glam::DVec2;

/// What a piece of text is, so the host can pick font and placement style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Caption,
    Value,
    Unit,
    /// Dial graduations, cardinal letters and secondary readouts
    Label,
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextRole::Caption => "caption",
            TextRole::Value => "value",
            TextRole::Unit => "unit",
            TextRole::Label => "label",
        })
    }
}

/// Semantic colour of a stroke or fill; the host maps it onto its theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Normal,
    Warning,
    Alarm,
    Marker,
    Port,
    Starboard,
}

pub trait Canvas {
    /// Drawable size in pixels
    fn size(&self) -> DVec2;

    fn clear(&mut self);

    fn text(&mut self, text: &str, at: DVec2, role: TextRole);

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, tone: Tone);

    /// Circular arc from `start_deg` clockwise to `end_deg`
    fn arc(&mut self, center: DVec2, radius: f64, start_deg: f64, end_deg: f64, width: f64, tone: Tone);

    /// Filled polygon
    fn polygon(&mut self, points: &[DVec2], tone: Tone);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Text {
        text: String,
        at: DVec2,
        role: TextRole,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        tone: Tone,
    },
    Arc {
        center: DVec2,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        width: f64,
        tone: Tone,
    },
    Polygon {
        points: Vec<DVec2>,
        tone: Tone,
    },
}

/// A canvas that records every call instead of drawing
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    size: DVec2,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All painted text, in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Painted text for one role, in paint order
    pub fn texts_with_role(&self, role: TextRole) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, role: r, .. } if *r == role => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// One `role: text` line per painted text, skipping dial labels
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            match command {
                DrawCommand::Text { text, role, .. } if *role != TextRole::Label => {
                    out.push_str(&format!("{role}: {text}\n"));
                }
                _ => {}
            }
        }
        out
    }

    /// Number of recorded commands matching a predicate
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn text(&mut self, text: &str, at: DVec2, role: TextRole) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            role,
        });
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, tone: Tone) {
        self.commands.push(DrawCommand::Line { from, to, width, tone });
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_deg: f64, end_deg: f64, width: f64, tone: Tone) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_deg,
            end_deg,
            width,
            tone,
        });
    }

    fn polygon(&mut self, points: &[DVec2], tone: Tone) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            tone,
        });
    }
}
