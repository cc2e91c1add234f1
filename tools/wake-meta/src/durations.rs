//! Measuring sounds and writing the duration table.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::sound_items::table_len;

/// The handheld refreshes at 60 frames per second.
pub const DEFAULT_FPS: u32 = 60;

const VALUES_PER_LINE: usize = 12;

/// Length of a WAV file in whole frames, rounded down.
pub fn wav_frames(path: &Path, fps: u32) -> Result<u64> {
    let reader = hound::WavReader::open(path).with_context(|| format!("Failed to load WAV: {:?}", path))?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        bail!("{:?} has a sample rate of 0", path);
    }

    // duration() counts samples per channel
    Ok(u64::from(reader.duration()) * u64::from(fps) / u64::from(spec.sample_rate))
}

/// Frames per sound item id, for every `.wav` in `directory` named after an item.
pub fn calculate_durations(directory: &Path, items: &BTreeMap<String, u16>, fps: u32) -> Result<BTreeMap<u16, u16>> {
    let mut durations = BTreeMap::new();

    let entries = fs::read_dir(directory).with_context(|| format!("Failed to read {:?}", directory))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "wav") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Some(&id) = items.get(stem) else {
            debug!("{:?} is not a sound item, skipping", path);
            continue;
        };

        let frames = wav_frames(&path, fps)?;
        let frames = u16::try_from(frames).with_context(|| format!("{:?} is too long: {} frames", path, frames))?;
        if frames == 0 {
            warn!("{:?} is shorter than one frame", path);
        }
        debug!("{} (#{}): {} frames", stem, id, frames);
        durations.insert(id, frames);
    }

    for (name, id) in items {
        if !durations.contains_key(id) {
            warn!("no WAV for sound item {:?} (#{}), its duration will be 0", name, id);
        }
    }

    Ok(durations)
}

/// Rust source for a `DURATIONS` table covering every sound item id.
///
/// The table is meant to be wrapped in a `wake::DurationTable` for lookups.
/// Ids without a measured duration get 0, which the sound looper refuses, so
/// a missing file shows up as soon as a scene tries to loop that sound.
pub fn generate_module(durations: &BTreeMap<u16, u16>, items: &BTreeMap<String, u16>, source: &str, fps: u32) -> String {
    let len = table_len(items).max(durations.keys().map(|&id| usize::from(id) + 1).max().unwrap_or(0));
    let values: Vec<String> = (0..len)
        .map(|id| durations.get(&(id as u16)).copied().unwrap_or(0).to_string())
        .collect();

    let mut content = String::new();
    let _ = writeln!(content, "// Generated by wake-meta from {} at {} fps. Do not edit.", source, fps);
    content.push('\n');
    let _ = writeln!(content, "pub const DURATIONS: [u16; {}] = [", len);
    for line in values.chunks(VALUES_PER_LINE) {
        let _ = writeln!(content, "    {},", line.join(", "));
    }
    content.push_str("];\n");
    content
}
