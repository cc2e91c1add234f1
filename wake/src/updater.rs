//! # Update Dispatch
//!
//! An [`Updater`] is a short, fixed-capacity list of entities that get one
//! [`Updatable::update`] call per frame, in the order they were added.
//!
//! The updater never owns its entities. It holds shared handles to
//! `RefCell`s that live somewhere else (usually on the scene's stack), and
//! the `'a` lifetime makes the compiler check that every entity outlives the
//! updater. Between updates the scene is free to borrow an entity to read
//! its state:
//!
//! ```ignore
//! let walker = RefCell::new(Walker::new(sprite, step));
//! let mut updater: Updater<'_, 4> = Updater::new();
//! updater.add(&walker)?;
//!
//! updater.update(&input);
//! let position = walker.borrow().position();
//! ```

use core::cell::RefCell;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::input::FrameInput;

/// Anything that does work once per frame.
pub trait Updatable {
    fn update(&mut self, input: &FrameInput);
}

pub struct Updater<'a, const N: usize> {
    updatables: heapless::Vec<&'a RefCell<dyn Updatable + 'a>, N>,
}

impl<'a, const N: usize> Updater<'a, N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "an updater needs room for at least one entity") };
        Self {
            updatables: heapless::Vec::new(),
        }
    }

    /// Register `updatable` after everything already registered.
    pub fn add(&mut self, updatable: &'a RefCell<dyn Updatable + 'a>) -> Result<()> {
        self.updatables.push(updatable).map_err(|_| {
            warn!("updater is full ({} entities), dropping registration", N);
            Error::CapacityExceeded { capacity: N }
        })?;
        debug!("registered updatable {}/{}", self.updatables.len(), N);
        Ok(())
    }

    /// Update every entity once, in registration order.
    ///
    /// An entity that is already borrowed elsewhere is skipped for this frame.
    pub fn update(&mut self, input: &FrameInput) {
        for (slot, updatable) in self.updatables.iter().enumerate() {
            match updatable.try_borrow_mut() {
                Ok(mut updatable) => updatable.update(input),
                Err(_) => warn!("updatable {} is borrowed, skipping its update", slot),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.updatables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updatables.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.updatables.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Updater<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
