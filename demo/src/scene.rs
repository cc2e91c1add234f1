use std::cell::RefCell;

use anyhow::{Context, Result};
use tracing::{debug, info};
use wake::{
    point_in_rect, text_bounds, DurationTable, Fixed, FixedPoint, FrameInput, Mixer, SoundLooper, Updater, Walker,
};

use crate::assets::{sound_items, INFO_TEXT_LINES, VARIABLE_8X16_FONT};
use crate::platform::Platform;
use crate::sound_durations::DURATIONS;

/// Top line of the info text, in screen coordinates centred on the display.
const INFO_TOP: i32 = -72;
const INFO_LINE_HEIGHT: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub step_size: Fixed,
    pub font_height: i32,
    pub walker_start: FixedPoint,
    pub counter_center: FixedPoint,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            step_size: wake::DEFAULT_STEP,
            font_height: wake::DEFAULT_FONT_HEIGHT,
            walker_start: FixedPoint::from_ints(0, 0),
            counter_center: FixedPoint::from_ints(0, 40),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneSummary {
    pub frames: u32,
    /// Times the walker stepped onto the counter
    pub touches: u32,
    /// Narration clips started by the looper
    pub clips_started: u32,
    pub cancelled: bool,
}

fn info_line_center(line: usize) -> FixedPoint {
    FixedPoint::from_ints(0, INFO_TOP + INFO_LINE_HEIGHT * line as i32)
}

/// Run the scene until cancel is pressed or the platform stops.
///
/// The walker follows the d-pad while the narration loops in the background.
/// Every time the walker steps onto the counter text, the counter goes up.
/// Confirm replays the full intro clip on top of the narration.
pub fn sound_scene<P: Platform>(platform: &mut P, config: &SceneConfig) -> Result<SceneSummary> {
    let durations = DurationTable::new(&DURATIONS);
    let mut narration: SoundLooper<{ sound_items::NARRATION.len() }> =
        SoundLooper::new(&sound_items::NARRATION, &durations).context("narration clips")?;

    let sprite = platform.create_sprite(config.walker_start);
    let walker = RefCell::new(Walker::new(sprite, config.step_size));
    let mut updater: Updater<'_, 4> = Updater::new();
    updater.add(&walker).context("registering walker")?;

    info!(
        "scene start: walker at {}, counter at {}, {} narration frames per loop",
        config.walker_start,
        config.counter_center,
        narration.cycle_length()
    );

    let mut input = FrameInput::new();
    let mut counter = String::from("0");
    let mut touching = false;
    let mut summary = SceneSummary::default();

    loop {
        input.poll(platform.keypad());

        if input.cancel_pressed() {
            summary.cancelled = true;
            break;
        }
        if input.confirm_pressed() {
            platform.mixer().play_with_volume(sound_items::RIVERRUN_DEMO, Fixed::ONE);
        }

        updater.update(&input);
        if narration.tick(platform.mixer()).is_some() {
            summary.clips_started += 1;
        }

        let position = walker.borrow().position();
        let bounds = text_bounds(config.counter_center, &counter, &VARIABLE_8X16_FONT, config.font_height)
            .with_context(|| format!("measuring counter {:?}", counter))?;
        let inside = point_in_rect(position, &bounds);
        if inside && !touching {
            summary.touches += 1;
            counter = summary.touches.to_string();
            wake::log!("touch", summary.touches, "at", position);
        }
        touching = inside;

        for (line, text) in INFO_TEXT_LINES.iter().enumerate() {
            platform.draw_text(info_line_center(line), text);
        }
        platform.draw_text(config.counter_center, &counter);

        summary.frames += 1;
        if !platform.end_frame() {
            break;
        }
    }

    debug!("scene end: {:?}", summary);
    Ok(summary)
}
