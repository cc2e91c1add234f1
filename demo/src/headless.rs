//! A platform with no screen and no speakers.
//!
//! Keys come from a script, sounds are recorded instead of played, and text
//! is only traced. Runs for a fixed number of frames.

use clap::ValueEnum;
use tracing::{debug, trace};
use wake::{Fixed, FixedPoint, Keys, Mixer, SoundItem, VirtualSprite};

use crate::platform::Platform;

/// Canned keypad input for the demo binary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Script {
    /// Touch nothing
    Idle,
    /// Pace up and down through the counter, replay the intro once
    Walk,
    /// Wander off down and to the right
    Diagonal,
}

impl Script {
    pub fn keys(&self, frame: u32) -> Keys {
        match self {
            Script::Idle => Keys::empty(),
            Script::Walk => {
                let mut keys = if frame % 120 < 60 { Keys::DOWN } else { Keys::UP };
                if (10..=12).contains(&frame) {
                    keys |= Keys::A;
                }
                keys
            }
            Script::Diagonal => Keys::DOWN | Keys::RIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Played {
    pub frame: u32,
    pub item: SoundItem,
}

#[derive(Debug, Default)]
pub struct RecordingMixer {
    frame: u32,
    pub played: Vec<Played>,
}

impl Mixer for RecordingMixer {
    fn play(&mut self, item: SoundItem) {
        self.play_with_volume(item, Fixed::ONE);
    }

    fn play_with_volume(&mut self, item: SoundItem, volume: Fixed) {
        debug!(frame = self.frame, "play {} at volume {}", item, volume);
        self.played.push(Played { frame: self.frame, item });
    }
}

pub struct Headless {
    frame: u32,
    frames: u32,
    script: Box<dyn Fn(u32) -> Keys>,
    pub mixer: RecordingMixer,
}

impl Headless {
    pub fn new(frames: u32, script: impl Fn(u32) -> Keys + 'static) -> Self {
        Self {
            frame: 0,
            frames,
            script: Box::new(script),
            mixer: RecordingMixer::default(),
        }
    }
}

impl Platform for Headless {
    type Sprite = VirtualSprite;
    type Mixer = RecordingMixer;

    fn create_sprite(&mut self, position: FixedPoint) -> VirtualSprite {
        VirtualSprite::new(position)
    }

    fn keypad(&mut self) -> Keys {
        (self.script)(self.frame)
    }

    fn mixer(&mut self) -> &mut RecordingMixer {
        &mut self.mixer
    }

    fn draw_text(&mut self, center: FixedPoint, text: &str) {
        trace!(frame = self.frame, "text {:?} at {}", text, center);
    }

    fn end_frame(&mut self) -> bool {
        self.frame += 1;
        self.mixer.frame = self.frame;
        self.frame < self.frames
    }
}
