//! Garden scene: sky, clouds, grass and recursively branched trees.
//!
//! Everything here is a pure function of its inputs. Leaf and decoration
//! placement is derived from positions with `sin`/`cos`, so a tree drawn
//! twice from the same descriptor produces identical commands.

use crate::draw::{DrawCommand, Point};
use crate::growth::{Seed, MAX_MATURITY};
use std::f64::consts::PI;
use thiserror::Error;

/// Branches shorter than this end in foliage.
const MIN_BRANCH_LEN: f64 = 18.0;
const BRANCH_SHRINK: f64 = 0.72;
const BRANCH_THIN: f64 = 0.7;
const BRANCH_SPREAD: f64 = 0.45;

/// Cloud drift per frame.
const CLOUD_SPEED: f64 = 0.3;

const LEAF_COLORS: [&str; 3] = ["#166534", "#15803d", "#22c55e"];

/// Largest canvas side, in pixels.
pub const MAX_CANVAS: f64 = 10_000.0;

/// Distance between grass blades.
const GRASS_SPACING: f64 = 5.0;

/// Smallest and largest trunk height, for maturity 0 and 100.
const MIN_TREE_SIZE: f64 = 50.0;
const MAX_TREE_SIZE: f64 = 90.0;

/// Where and how big to draw one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSpec {
    pub name: String,
    /// Base of the trunk.
    pub x: f64,
    pub y: f64,
    /// Trunk height.
    pub size: f64,
}

impl TreeSpec {
    pub fn new(name: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            size,
        }
    }

    /// A tree for `seed`, sized by its maturity percentage.
    pub fn from_seed(seed: Seed, x: f64, y: f64, maturity: u8) -> Self {
        let ratio = f64::from(maturity.min(MAX_MATURITY)) / f64::from(MAX_MATURITY);
        let size = MIN_TREE_SIZE + (MAX_TREE_SIZE - MIN_TREE_SIZE) * ratio;
        Self::new(seed.title(), x, y, size)
    }
}

/// Canvas size that cannot be drawn on.
#[derive(Debug, Error, PartialEq)]
#[error("canvas must be positive and at most 10000 px per side, got {width}x{height}")]
pub struct InvalidCanvas {
    pub width: f64,
    pub height: f64,
}

/// Check that both sides are finite, positive and at most [`MAX_CANVAS`].
pub fn check_canvas(width: f64, height: f64) -> Result<(), InvalidCanvas> {
    let ok = |side: f64| side.is_finite() && side > 0.0 && side <= MAX_CANVAS;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(InvalidCanvas { width, height })
    }
}

/// Number of grass blades across `width`. Widths past [`MAX_CANVAS`] are
/// cut off, and NaN or non-positive widths get none.
fn grass_blades(width: f64) -> usize {
    if width.is_finite() && width > 0.0 {
        (width.min(MAX_CANVAS) / GRASS_SPACING).ceil() as usize
    } else {
        0
    }
}

/// Sun, clouds, ground and grass for one frame.
pub fn environment(width: f64, height: f64, cloud_offset: f64) -> Vec<DrawCommand> {
    let mut out = Vec::new();

    // Sun and its glow
    out.push(DrawCommand::circle(width / 2.0, 100.0, 80.0, "rgba(255, 230, 0, 0.1)"));
    out.push(DrawCommand::circle(width / 2.0, 100.0, 30.0, "#ffde00"));

    for i in 0..4 {
        let i = f64::from(i);
        let cx = ((i * 500.0 + cloud_offset) % (width + 300.0)) - 150.0;
        let cy = 120.0 + i * 10.0;
        for (dx, r) in [(0.0, 35.0), (45.0, 50.0), (90.0, 35.0)] {
            out.push(DrawCommand::circle(cx + dx, cy, r, "rgba(255, 255, 255, 0.15)"));
        }
    }

    out.push(DrawCommand::rect(0.0, height - 60.0, width, 60.0, "#064e3b"));

    for blade in 0..grass_blades(width) {
        let x = blade as f64 * GRASS_SPACING;
        let color = if blade % 3 == 0 { "#10b981" } else { "#059669" };
        let sway = (cloud_offset * 0.05 + x).sin() * 4.0;
        out.push(DrawCommand::line(
            Point::new(x, height - 40.0),
            Point::new(x + sway, height - 75.0),
            3.0,
            color,
        ));
    }

    out
}

/// Trunk, branches, foliage, decorations and label for one tree.
pub fn tree(spec: &TreeSpec) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    let top = Point::new(spec.x, spec.y - spec.size);

    out.push(DrawCommand::line(Point::new(spec.x, spec.y), top, 16.0, "#000"));

    let len = spec.size * 0.8;
    branch(top, len, -PI / 2.0 - 0.3, 12.0, &mut out);
    branch(top, len, -PI / 2.0 + 0.3, 12.0, &mut out);

    out.push(DrawCommand::Text {
        at: Point::new(spec.x, spec.y + 45.0),
        text: spec.name.clone(),
        font: "bold 16px Inter",
        color: "#f8fafc",
    });
    out
}

fn branch(start: Point, len: f64, angle: f64, width: f64, out: &mut Vec<DrawCommand>) {
    if len < MIN_BRANCH_LEN {
        foliage(start, out);
        let deco_seed = (start.x + start.y).sin().abs();
        if deco_seed > 0.8 {
            decoration(start, deco_seed % 1.0, out);
        }
        return;
    }

    let end = Point::new(start.x + angle.cos() * len, start.y + angle.sin() * len);
    out.push(DrawCommand::line(start, end, width, "#000"));

    let next_len = len * BRANCH_SHRINK;
    let next_width = width * BRANCH_THIN;
    branch(end, next_len, angle - BRANCH_SPREAD, next_width, out);
    branch(end, next_len, angle + BRANCH_SPREAD, next_width, out);
}

fn foliage(at: Point, out: &mut Vec<DrawCommand>) {
    for i in 0..6 {
        let fi = f64::from(i);
        let ox = (at.x + fi).sin() * 20.0;
        let oy = (at.y + fi).cos() * 20.0;
        out.push(DrawCommand::circle(at.x + ox, at.y + oy, 14.0, LEAF_COLORS[i as usize % 3]));
    }
}

fn decoration(at: Point, type_seed: f64, out: &mut Vec<DrawCommand>) {
    if type_seed > 0.5 {
        // Apple with a stem
        out.push(DrawCommand::circle(at.x, at.y, 8.0, "#ef4444"));
        out.push(DrawCommand::rect(at.x - 1.0, at.y - 11.0, 2.0, 4.0, "#000"));
    } else {
        for i in 0..5 {
            let fi = f64::from(i);
            out.push(DrawCommand::circle(
                at.x + fi.cos() * 6.0,
                at.y + fi.sin() * 6.0,
                5.0,
                "#f472b6",
            ));
        }
        out.push(DrawCommand::circle(at.x, at.y, 3.0, "#fff"));
    }
}

/// An animated garden: trees plus drifting clouds.
#[derive(Debug, Clone)]
pub struct Garden {
    width: f64,
    height: f64,
    cloud_offset: f64,
    trees: Vec<TreeSpec>,
}

impl Garden {
    /// A garden with the three starter trees.
    pub fn new(width: f64, height: f64) -> Self {
        let trees = vec![
            TreeSpec::new("Machine Learning", 300.0, height - 80.0, 70.0),
            TreeSpec::new("Python", 650.0, height - 110.0, 85.0),
            TreeSpec::new("DSA", 1000.0, height - 70.0, 75.0),
        ];
        Self::with_trees(width, height, trees)
    }

    pub fn with_trees(width: f64, height: f64, trees: Vec<TreeSpec>) -> Self {
        Self {
            width,
            height,
            cloud_offset: 0.0,
            trees,
        }
    }

    /// One tree per seed, spread evenly across the width.
    pub fn from_seeds(width: f64, height: f64, seeds: &[Seed], maturity: u8) -> Self {
        let spacing = width / (seeds.len() as f64 + 1.0);
        let trees = seeds
            .iter()
            .enumerate()
            .map(|(i, &seed)| {
                TreeSpec::from_seed(seed, spacing * (i as f64 + 1.0), height - 80.0, maturity)
            })
            .collect();
        Self::with_trees(width, height, trees)
    }

    pub fn trees(&self) -> &[TreeSpec] {
        &self.trees
    }

    pub fn cloud_offset(&self) -> f64 {
        self.cloud_offset
    }

    /// Advance the clouds one step and draw the whole scene.
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        self.cloud_offset += CLOUD_SPEED;
        let mut out = environment(self.width, self.height, self.cloud_offset);
        for spec in &self.trees {
            out.extend(tree(spec));
        }
        out
    }
}
