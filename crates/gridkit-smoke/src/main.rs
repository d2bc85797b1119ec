//! GridKit Smoke Harness
//!
//! Runs one layout pass over a JSON scene (or the built-in demo scene) and
//! prints the resulting geometry as JSON on stdout. Logs go to stderr.

mod scene;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::scene::Scene;

/// Parse command line arguments
struct Args {
    scene: Option<PathBuf>,
    width: f32,
    height: f32,
    pretty: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut scene = None;
        let mut width = 1100.0_f32;
        let mut height = 640.0_f32;
        let mut pretty = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scene" => {
                    scene = args.next().map(PathBuf::from);
                }
                "--width" => {
                    if let Some(val) = args.next() {
                        width = val.parse().unwrap_or(1100.0);
                    }
                }
                "--height" => {
                    if let Some(val) = args.next() {
                        height = val.parse().unwrap_or(640.0);
                    }
                }
                "--pretty" => pretty = true,
                other => warn!("Ignoring unknown argument {:?}", other),
            }
        }

        Self {
            scene,
            width,
            height,
            pretty,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            info!("No scene file given, using the demo scene");
            Scene::demo()
        }
    };

    let report = scene.run(args.width, args.height)?;
    info!(
        rows = report.geometry.row_count(),
        total_height = report.geometry.total_height,
        "Layout pass complete"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(
        scene = ?args.scene,
        width = args.width,
        height = args.height,
        "Starting GridKit Smoke Harness"
    );

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
