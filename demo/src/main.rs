mod assets;
mod headless;
mod platform;
mod scene;
mod sound_durations;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;
use wake::{Fixed, DEFAULT_FONT_HEIGHT};

use crate::headless::{Headless, Script};
use crate::scene::{sound_scene, SceneConfig};

/// Fastest walker the scene allows, in pixels per frame.
const MAX_STEP: i64 = 64;

#[derive(Parser)]
#[command(name = "wake-demo")]
#[command(version, about = "Run the wake scene on a headless host", long_about = None)]
struct Cli {
    /// Number of frames to run, at 60 per second
    #[arg(short, long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,

    /// Walker speed in pixels per frame
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..=MAX_STEP))]
    step: i32,

    /// Height of the counter text's bounding box
    #[arg(long, default_value_t = DEFAULT_FONT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    font_height: i32,

    /// Scripted keypad input
    #[arg(long, value_enum, default_value_t = Script::Walk)]
    script: Script,

    /// Most verbose log level to print
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            step_size: Fixed::from_int(self.step),
            font_height: self.font_height,
            ..SceneConfig::default()
        }
    }
}

fn setup_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let config = cli.scene_config();

    let script = cli.script;
    let mut host = Headless::new(cli.frames, move |frame| script.keys(frame));
    let summary = sound_scene(&mut host, &config)?;

    info!(
        "{} frames, {} touches, {} narration clips, {} sounds played{}",
        summary.frames,
        summary.touches,
        summary.clips_started,
        host.mixer.played.len(),
        if summary.cancelled { " (cancelled)" } else { "" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("wake-demo").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_match_scene_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.frames, 600);
        assert_eq!(cli.scene_config(), SceneConfig::default());
    }

    #[test]
    fn test_zero_frames_is_rejected() {
        assert!(parse(&["--frames", "0"]).is_err());
        assert_eq!(parse(&["--frames", "1"]).unwrap().frames, 1);
    }

    #[test]
    fn test_step_and_font_height_must_be_positive() {
        assert!(parse(&["--step", "0"]).is_err());
        assert!(parse(&["--step", "65"]).is_err());
        assert!(parse(&["--font-height", "0"]).is_err());
        assert!(parse(&["--font-height=-16"]).is_err());

        let cli = parse(&["--step", "2", "--font-height", "8"]).unwrap();
        let config = cli.scene_config();
        assert_eq!(config.step_size, Fixed::from_int(2));
        assert_eq!(config.font_height, 8);
    }
}
