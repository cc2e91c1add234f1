//! # wake
//!
//! Frame logic for a walking-sprite demo on a fixed-hardware handheld.
//!
//! The host engine owns rendering, mixing and the game loop. This crate owns
//! the little bits of arithmetic and state that sit on top of it:
//!
//! - [`text`]: pixel bounds of a string from a font's glyph width table
//! - [`geometry`]: inclusive point-in-rectangle tests
//! - [`sound`]: a looper that plays a list of clips back to back, forever
//! - [`updater`]: a fixed-capacity list of things to update once per frame
//! - [`walker`]: a sprite that walks around following the d-pad
//!
//! The host is reached through the traits in [`host`], so the same frame logic
//! runs on hardware and in the headless simulation used by `wake-demo`.
//!
//! ```ignore
//! let walker = RefCell::new(Walker::new(sprite, walker::DEFAULT_STEP));
//! let mut updater: Updater<'_, 4> = Updater::new();
//! updater.add(&walker)?;
//!
//! let mut looper: SoundLooper<8> = SoundLooper::new(&clips, &DurationTable::new(&DURATIONS))?;
//!
//! loop {
//!     input.poll(Keys::read());
//!     updater.update(&input);
//!     looper.tick(&mut mixer);
//!
//!     let bounds = text_bounds(center, line, &font, DEFAULT_FONT_HEIGHT)?;
//!     if point_in_rect(walker.borrow().position(), &bounds) {
//!         wake::log!("overlap at", walker.borrow().position());
//!     }
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod diag;
pub mod error;
pub mod fixed;
pub mod geometry;
pub mod host;
pub mod input;
pub mod sound;
pub mod text;
pub mod updater;
pub mod walker;

pub use error::{Error, Result};
pub use fixed::{Fixed, FixedPoint};
pub use geometry::{point_in_corners, point_in_rect, point_in_rect_scalar, Rectangle};
pub use host::{Mixer, Sprite, VirtualSprite};
pub use input::{Button, FrameInput, Keys};
pub use sound::{Clip, DurationTable, SoundItem, SoundLooper};
pub use text::{string_width, text_bounds, text_bounds_default, SpriteFont, DEFAULT_FONT_HEIGHT, STARTING_CHAR};
pub use updater::{Updatable, Updater};
pub use walker::{Walker, DEFAULT_STEP};
