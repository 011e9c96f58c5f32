//! Draw commands emitted by the garden renderer.

use serde::Serialize;

/// A point on the canvas, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single primitive for a 2D canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: &'static str,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Text {
        at: Point,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

impl DrawCommand {
    pub fn circle(x: f64, y: f64, radius: f64, color: &'static str) -> Self {
        DrawCommand::Circle {
            center: Point::new(x, y),
            radius,
            color,
        }
    }

    pub fn line(from: Point, to: Point, width: f64, color: &'static str) -> Self {
        DrawCommand::Line {
            from,
            to,
            width,
            color,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64, color: &'static str) -> Self {
        DrawCommand::Rect {
            origin: Point::new(x, y),
            width,
            height,
            color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Text { .. } => "text",
        }
    }
}

/// Count commands by kind, in first-seen order.
pub fn summarize(commands: &[DrawCommand]) -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for cmd in commands {
        match counts.iter_mut().find(|(kind, _)| *kind == cmd.kind()) {
            Some((_, n)) => *n += 1,
            None => counts.push((cmd.kind(), 1)),
        }
    }
    counts
}
