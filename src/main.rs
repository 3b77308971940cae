//! Headless GridSketch runner: replays an input script and prints the
//! resulting render plan as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gridsketch::script::{replay, Script};
use gridsketch::{designer_options_from, init_logging, Config, DesignerState};

/// Replay recorded pointer input against the drawing core
#[derive(Parser, Debug)]
#[command(name = "gridsketch", version)]
#[command(about = "Replay a GridSketch input script and print the render plan")]
struct Args {
    /// JSON script of pointer events and tool changes
    script: PathBuf,

    /// Configuration file (TOML or JSON); defaults to the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the object store snapshot instead of the render plan
    #[arg(long)]
    snapshot: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json)?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };

    let mut designer = DesignerState::new(designer_options_from(&config))?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let script = Script::from_json(&text)?;
    let stats = replay(&mut designer, &script);
    tracing::info!(
        steps = stats.steps,
        committed = stats.committed,
        rejected = stats.rejected,
        version = gridsketch::VERSION,
        "Replay finished"
    );

    let output = if args.snapshot {
        serde_json::to_string_pretty(&designer.snapshot())?
    } else {
        serde_json::to_string_pretty(&designer.render_plan())?
    };
    println!("{output}");

    Ok(())
}
