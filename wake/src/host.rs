//! # Host Interface
//!
//! The engine underneath owns sprites and the sound mixer. Frame logic only
//! ever needs to move a sprite and start a clip, so that's all these traits
//! ask for.
//!
//! | Trait      | Engine side                      |
//! |------------|----------------------------------|
//! | [`Sprite`] | a sprite handle's position       |
//! | [`Mixer`]  | "play this sound item now"       |
//!
//! Keypad state isn't a trait: the host polls it into a
//! [`FrameInput`](crate::input::FrameInput) once per frame.

use crate::fixed::{Fixed, FixedPoint};
use crate::sound::SoundItem;

/// Something on screen with a position.
pub trait Sprite {
    fn position(&self) -> FixedPoint;

    fn set_position(&mut self, position: FixedPoint);

    #[inline]
    fn x(&self) -> Fixed {
        self.position().x
    }

    #[inline]
    fn y(&self) -> Fixed {
        self.position().y
    }

    #[inline]
    fn set_x(&mut self, x: Fixed) {
        let y = self.y();
        self.set_position(FixedPoint::new(x, y));
    }

    #[inline]
    fn set_y(&mut self, y: Fixed) {
        let x = self.x();
        self.set_position(FixedPoint::new(x, y));
    }
}

impl<S: Sprite + ?Sized> Sprite for &mut S {
    fn position(&self) -> FixedPoint {
        (**self).position()
    }

    fn set_position(&mut self, position: FixedPoint) {
        (**self).set_position(position)
    }
}

/// Starts sound clips.
pub trait Mixer {
    fn play(&mut self, item: SoundItem);

    /// `volume` runs from 0 to 1. Hosts without per-clip volume just play.
    fn play_with_volume(&mut self, item: SoundItem, volume: Fixed) {
        let _ = volume;
        self.play(item);
    }
}

impl<M: Mixer + ?Sized> Mixer for &mut M {
    fn play(&mut self, item: SoundItem) {
        (**self).play(item)
    }

    fn play_with_volume(&mut self, item: SoundItem, volume: Fixed) {
        (**self).play_with_volume(item, volume)
    }
}

/// A sprite that is only a position. Used off-hardware and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualSprite {
    position: FixedPoint,
}

impl VirtualSprite {
    pub const fn new(position: FixedPoint) -> Self {
        Self { position }
    }
}

impl Sprite for VirtualSprite {
    fn position(&self) -> FixedPoint {
        self.position
    }

    fn set_position(&mut self, position: FixedPoint) {
        self.position = position;
    }
}
