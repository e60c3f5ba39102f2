//! Scrawl CLI
//!
//! The reference host: replays gesture scripts into a drawing session and
//! exports the committed strokes as a PNG in the gallery directory.

mod config;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use scrawl_export::{export_name, DiskGallery, Exporter};
use scrawl_recorder::{replay, GestureScript, ScriptEvent};

use crate::config::ScrawlConfig;

#[derive(Parser)]
#[command(name = "scrawl", version, about = "Freehand stroke capture and PNG export")]
struct Cli {
    /// Path to a scrawl.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a gesture script and export the drawing as a PNG
    Render {
        /// Gesture script (JSON)
        script: PathBuf,
        /// Gallery directory for the exported image
        #[arg(long)]
        out: Option<PathBuf>,
        /// Exported file name
        #[arg(long)]
        name: Option<String>,
    },
    /// Write a starter gesture script
    InitScript {
        /// Where to write the script
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ScrawlConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Render { script, out, name } => render(&config, &script, out, name),
        Command::InitScript { path } => init_script(&config, &path),
    }
}

fn render(
    config: &ScrawlConfig,
    script_path: &Path,
    out: Option<PathBuf>,
    name: Option<String>,
) -> Result<()> {
    let script = GestureScript::load(script_path)
        .with_context(|| format!("failed to load {}", script_path.display()))?;

    let session = replay(&script);
    tracing::info!(
        strokes = session.strokes().len(),
        events = script.len(),
        "script replayed"
    );

    let gallery = out.unwrap_or_else(|| config.export.dir.clone());
    let name = name.unwrap_or_else(|| export_name(&config.export.prefix, unix_millis()));

    let (width, height) = session.canvas_size();
    let exporter = Exporter::new(DiskGallery::new(gallery));
    let receipt = exporter.export(
        session.strokes(),
        width,
        height,
        session.background(),
        script.density_scale,
        &name,
    )?;

    println!("Saved {}", receipt.path.display());
    Ok(())
}

/// A small squiggle scaled to the configured canvas, as a starting point
/// for hand-edited scripts.
fn init_script(config: &ScrawlConfig, path: &Path) -> Result<()> {
    let width = config.canvas.width;
    let height = config.canvas.height;
    let mut script = GestureScript::new(width, height, config.canvas.density_scale);

    let w = width as f32;
    let h = height as f32;
    script.push(0, ScriptEvent::SetStrokeWidth { width_dp: 6.0 });
    script.push(10, ScriptEvent::PointerDown { x: w * 0.2, y: h * 0.5 });
    script.push(26, ScriptEvent::PointerMove { x: w * 0.4, y: h * 0.3 });
    script.push(42, ScriptEvent::PointerMove { x: w * 0.6, y: h * 0.7 });
    script.push(58, ScriptEvent::PointerMove { x: w * 0.8, y: h * 0.5 });
    script.push(74, ScriptEvent::PointerUp);

    script
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote starter script to {}", path.display());
    Ok(())
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
