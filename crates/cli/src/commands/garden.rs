//! Garden rendering command.

use anyhow::{bail, Result};
use bonsai_garden::{apply_growth, check_canvas, summarize, Garden, Seed};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct GardenArgs {
    /// Canvas width in pixels
    #[arg(long, default_value = "1280")]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value = "720")]
    height: f64,

    /// Number of animation frames to render
    #[arg(long, default_value = "1")]
    frames: usize,

    /// Grow one tree per seed instead of the starter trees (repeatable)
    #[arg(long = "seed")]
    seeds: Vec<Seed>,

    /// Tree maturity in percent (with --seed)
    #[arg(long, default_value = "50")]
    maturity: u8,

    /// Extra growth added to the maturity, capped at 100
    #[arg(long, default_value = "0")]
    grow: u8,

    /// Print the draw commands of the last frame as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: GardenArgs) -> Result<()> {
    check_canvas(args.width, args.height)?;
    if args.frames == 0 {
        bail!("Render at least one frame");
    }

    let maturity = apply_growth(args.maturity, args.grow);
    let mut garden = if args.seeds.is_empty() {
        Garden::new(args.width, args.height)
    } else {
        Garden::from_seeds(args.width, args.height, &args.seeds, maturity)
    };

    let mut commands = Vec::new();
    for _ in 0..args.frames {
        commands = garden.frame();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    println!();
    println!("{}", "Garden:".bold().cyan());
    println!();
    for tree in garden.trees() {
        println!(
            "  {} at ({:.0}, {:.0}), height {:.0}",
            tree.name.bold(),
            tree.x,
            tree.y,
            tree.size
        );
    }
    println!();
    println!(
        "  Frame {} ({} commands, cloud offset {:.1}):",
        args.frames,
        commands.len().to_string().bright_cyan(),
        garden.cloud_offset()
    );
    for (kind, count) in summarize(&commands) {
        println!("    {:<7} {}", kind, count);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(width: f64, height: f64) -> GardenArgs {
        GardenArgs {
            width,
            height,
            frames: 1,
            seeds: Vec::new(),
            maturity: 50,
            grow: 0,
            json: true,
        }
    }

    #[test]
    fn test_rejects_unusable_canvas() {
        for (w, h) in [
            (f64::INFINITY, 720.0),
            (1e10, 720.0),
            (f64::NAN, 720.0),
            (0.0, 720.0),
            (1280.0, f64::NEG_INFINITY),
        ] {
            assert!(run(args(w, h)).is_err(), "{}x{} should be rejected", w, h);
        }
    }

    #[test]
    fn test_rejects_zero_frames() {
        let mut a = args(1280.0, 720.0);
        a.frames = 0;
        assert!(run(a).is_err());
    }
}
