//! Decorative garden renderer for the bonsai game.
//!
//! The garden is described as plain data and rendered to a list of
//! [`DrawCommand`]s that any 2D canvas can replay. There is no drawing
//! context and no shared state: the same inputs give the same commands.

pub mod draw;
pub mod growth;
pub mod scene;

pub use draw::{summarize, DrawCommand, Point};
pub use growth::{apply_growth, Seed, UnknownSeed, MAX_MATURITY};
pub use scene::{check_canvas, environment, tree, Garden, InvalidCanvas, TreeSpec, MAX_CANVAS};
