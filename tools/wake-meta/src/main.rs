pub mod durations;
pub mod sound_items;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;

use crate::durations::{calculate_durations, generate_module, DEFAULT_FPS};
use crate::sound_items::{parse_sound_items, table_len};

#[derive(Parser)]
#[command(name = "wake-meta")]
#[command(version, about = "Sound metadata tool for wake", long_about = None)]
struct Cli {
    /// Print every file as it is measured
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure WAV files and write the sound duration table
    Generate {
        /// Sound item header generated by the asset build
        sound_items: PathBuf,

        /// Directory holding the source WAV files
        wav_dir: PathBuf,

        /// Output Rust file
        #[arg(short, long, default_value = "sound_durations.rs")]
        output: PathBuf,

        /// Frames per second of the target
        #[arg(long, default_value_t = DEFAULT_FPS)]
        fps: u32,
    },

    /// Print the sound items found in a header
    List {
        /// Sound item header generated by the asset build
        sound_items: PathBuf,
    },
}

fn setup_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .compact()
        .finish()
        .init();
}

fn read_sound_items(path: &Path) -> Result<BTreeMap<String, u16>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let items = parse_sound_items(&content);
    if items.is_empty() {
        bail!("no sound items found in {:?}", path);
    }
    Ok(items)
}

fn do_generate(sound_items: &Path, wav_dir: &Path, output: &Path, fps: u32) -> Result<()> {
    let items = read_sound_items(sound_items)?;
    info!("{} sound items, table length {}", items.len(), table_len(&items));

    let durations = calculate_durations(wav_dir, &items, fps)?;
    let source = sound_items
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| sound_items.display().to_string());
    let module = generate_module(&durations, &items, &source, fps);

    fs::write(output, module).with_context(|| format!("Failed to write {:?}", output))?;
    println!("Generated {}", output.display());
    Ok(())
}

fn do_list(sound_items: &Path) -> Result<()> {
    let items = read_sound_items(sound_items)?;
    let mut by_id: Vec<(u16, &str)> = items.iter().map(|(name, &id)| (id, name.as_str())).collect();
    by_id.sort();
    for (id, name) in by_id {
        println!("{:>4}  {}", id, name);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Generate { sound_items, wav_dir, output, fps } => {
            if fps == 0 {
                bail!("--fps must be at least 1");
            }
            do_generate(&sound_items, &wav_dir, &output, fps)
        }

        Commands::List { sound_items } => do_list(&sound_items),
    }
}
