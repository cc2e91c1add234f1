use crate::sound::SoundItem;

/// Everything that can go wrong in the frame logic.
///
/// All of these are data or programming errors caught at the boundary
/// (construction, registration, measurement). None of them are transient,
/// so nothing here is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("fixed-capacity container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("{item} has no positive duration")]
    InvalidDuration { item: SoundItem },

    #[error("character 0x{character:02X} at byte {position} has no glyph")]
    GlyphOutOfRange { character: u8, position: usize },

    #[error("text of {len} bytes is too wide to position")]
    TextTooWide { len: usize },

    #[error("font height {height} is not positive")]
    InvalidFontHeight { height: i32 },

    #[error("sound sequence is empty")]
    EmptySequence,
}

pub type Result<T> = core::result::Result<T, Error>;
