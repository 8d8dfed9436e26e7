//! Command-line entry point: extend one tilesheet by one tile row.
//!
//! Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=tile_extender=debug`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tile_extender::{DEFAULT_TILE_HEIGHT, ExtendOptions, default_output_path, extend};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source tilesheet (any format the decoder understands).
    input: PathBuf,

    /// Destination PNG. Defaults to `<input stem>tilesheet.png` beside the input.
    output: Option<PathBuf>,

    /// Height in pixels of the appended strip.
    #[arg(long, default_value_t = i64::from(DEFAULT_TILE_HEIGHT), allow_negative_numbers = true)]
    tile_height: i64,

    /// Alpha (0-255) of the strip's black fill.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    opacity: i64,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options =
        ExtendOptions::new(args.tile_height, args.opacity).context("Invalid parameters")?;
    let output = args.output_path();

    let size = extend(&args.input, &output, &options)
        .with_context(|| format!("Failed to extend {}", args.input.display()))?;

    println!(
        "{} -> {} ({}x{})",
        args.input.display(),
        output.display(),
        size.width,
        size.height
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "Parsed arguments");
    run(&args)
}
