//! Sound looper - plays a list of clips back to back, forever
//!
//! The mixer doesn't tell anyone when a clip ends, so the looper counts
//! frames itself. Each clip's length in frames comes from a duration table
//! generated at build time by `wake-meta`.

use core::fmt;
use core::num::NonZeroU16;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::host::Mixer;

/// Id of a sound in the engine's sound item list.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SoundItem(u16);

impl SoundItem {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for SoundItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sound item #{}", self.0)
    }
}

/// Clip lengths in frames, indexed by sound item id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DurationTable<'a> {
    frames: &'a [u16],
}

impl<'a> DurationTable<'a> {
    pub const fn new(frames: &'a [u16]) -> Self {
        Self { frames }
    }

    /// `None` if the table has no entry for `item`.
    pub fn duration(&self, item: SoundItem) -> Option<u16> {
        self.frames.get(usize::from(item.id())).copied()
    }

    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// A sound item with its validated length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clip {
    pub item: SoundItem,
    pub frames: NonZeroU16,
}

/// Loops over up to `N` clips.
///
/// Every clip is started on its first frame and the next one starts on the
/// frame after its last, so `[A: 2, B: 3]` plays A on ticks 0, 5, 10... and
/// B on ticks 2, 7, 12...
#[derive(Debug, Clone)]
pub struct SoundLooper<const N: usize> {
    clips: heapless::Vec<Clip, N>,
    /// Frames since the current clip started
    timer: u16,
    /// Current clip
    index: usize,
}

impl<const N: usize> SoundLooper<N> {
    /// Validates every clip up front, so `tick` can never stall on a zero or
    /// missing duration.
    pub fn new(items: &[SoundItem], durations: &DurationTable<'_>) -> Result<Self> {
        if items.is_empty() {
            warn!("sound looper needs at least one clip");
            return Err(Error::EmptySequence);
        }

        let mut clips = heapless::Vec::new();
        for &item in items {
            let Some(frames) = durations.duration(item).and_then(NonZeroU16::new) else {
                warn!("rejecting {}: duration is {:?}", item, durations.duration(item));
                return Err(Error::InvalidDuration { item });
            };
            clips
                .push(Clip { item, frames })
                .map_err(|_| Error::CapacityExceeded { capacity: N })?;
        }

        Ok(Self {
            clips,
            timer: 0,
            index: 0,
        })
    }

    /// Call once per frame. Returns the clip started this frame, if any.
    pub fn tick<M: Mixer + ?Sized>(&mut self, mixer: &mut M) -> Option<SoundItem> {
        let clip = self.clips[self.index];

        // check BEFORE incrementing: a clip starts on the tick its timer is 0
        let started = if self.timer == 0 {
            debug!("starting {} ({} frames)", clip.item, clip.frames);
            mixer.play(clip.item);
            Some(clip.item)
        } else {
            None
        };

        self.timer += 1;
        if self.timer == clip.frames.get() {
            self.timer = 0;
            self.index = (self.index + 1) % self.clips.len();
        }

        started
    }

    /// Back to the first clip; it starts again on the next tick.
    pub fn reset(&mut self) {
        self.timer = 0;
        self.index = 0;
    }

    pub fn current(&self) -> Clip {
        self.clips[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timer(&self) -> u16 {
        self.timer
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Frames from one start of the first clip to the next.
    pub fn cycle_length(&self) -> u32 {
        self.clips.iter().map(|clip| u32::from(clip.frames.get())).sum()
    }
}
