#![deny(unsafe_code)]
//! CLI binary for blobvatar.
//!
//! Subcommands:
//! - `render <seed>` — generate an avatar and write the SVG to a file
//! - `primitives <seed>` — print the drawing primitives as JSON

mod error;

use blobvatar_core::{compose, generate_avatar, AvatarOptions, DEFAULT_SIZE};
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "blobvatar", about = "Deterministic blob-avatar generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an avatar for a seed and write the SVG to a file.
    Render {
        /// Seed string (e.g. a username). May be empty.
        seed: String,

        /// Canvas width and height in user units.
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: f64,

        /// Output file path.
        #[arg(short, long, default_value = "avatar.svg")]
        output: PathBuf,
    },
    /// Print the drawing primitives for a seed as JSON.
    Primitives {
        /// Seed string (e.g. a username). May be empty.
        seed: String,

        /// Canvas width and height in user units.
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: f64,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render { seed, size, output } => {
            let options = AvatarOptions::with_size(size);
            let document = generate_avatar(&seed, &options)?;
            let shapes = document.primitives().len() - 1;

            std::fs::write(&output, document.to_string()).map_err(|e| {
                CliError::Io(format!("failed to write {}: {e}", output.display()))
            })?;

            if cli.json {
                let info = serde_json::json!({
                    "seed": seed,
                    "size": size,
                    "shapes": shapes,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered seed {seed:?} ({size}x{size}, {shapes} shapes) -> {}",
                    output.display()
                );
            }
        }
        Command::Primitives { seed, size } => {
            let options = AvatarOptions::with_size(size);
            let primitives = compose(&seed, &options)?;
            println!("{}", serde_json::to_string_pretty(&primitives)?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
