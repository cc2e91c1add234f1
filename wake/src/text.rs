//! # Text measurement
//!
//! Sprite fonts on the handheld are variable width: every printable character
//! has its own width in pixels, stored in a table that starts at the space
//! character ([`STARTING_CHAR`]). Summing the table entries for a string gives
//! its rendered width, and from there a bounding box around where the text
//! generator will put it.
//!
//! Characters without a glyph (control characters, anything past the end of
//! the table) are rejected with [`Error::GlyphOutOfRange`] rather than read
//! out of bounds.

use log::warn;

use crate::error::{Error, Result};
use crate::fixed::{Fixed, FixedPoint};
use crate::geometry::Rectangle;

/// Code of the first character in a glyph width table.
pub const STARTING_CHAR: u8 = 32;

/// Height used when the caller doesn't ask for one. Matches the 8x16 fonts.
pub const DEFAULT_FONT_HEIGHT: i32 = 16;

/// The parts of a sprite font this crate cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFont<'a> {
    character_widths: &'a [u8],
    height: i32,
}

impl<'a> SpriteFont<'a> {
    pub const fn new(character_widths: &'a [u8], height: i32) -> Self {
        Self { character_widths, height }
    }

    pub const fn character_widths(&self) -> &'a [u8] {
        self.character_widths
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Width of `character`, or `None` if the font has no glyph for it.
    #[inline]
    pub fn glyph_width(&self, character: u8) -> Option<u8> {
        let index = character.checked_sub(STARTING_CHAR)?;
        self.character_widths.get(usize::from(index)).copied()
    }
}

/// Rendered width of `text` in pixels. Zero for an empty string.
pub fn string_width(text: &str, font: &SpriteFont<'_>) -> Result<i32> {
    text.bytes()
        .enumerate()
        .try_fold(0i32, |total, (position, character)| match font.glyph_width(character) {
            Some(width) => total
                .checked_add(i32::from(width))
                .ok_or(Error::TextTooWide { len: text.len() }),
            None => {
                warn!("no glyph for 0x{:02X} at byte {} of {:?}", character, position, text);
                Err(Error::GlyphOutOfRange { character, position })
            }
        })
}

/// Bounding box of `text` drawn centred on `center`.
///
/// Both half extents go through fixed-point division, which truncates toward
/// zero. Halving an integer width is exact at this precision, so the box is
/// exactly `string_width` wide and `font_height` tall unless `center` itself
/// carries sub-pixel bits.
///
/// The result is always canonical. A `font_height` below 1 is rejected, and
/// so is text too wide to fit in fixed point around `center`.
pub fn text_bounds(center: FixedPoint, text: &str, font: &SpriteFont<'_>, font_height: i32) -> Result<Rectangle> {
    let too_wide = Error::TextTooWide { len: text.len() };

    let height = match font_height {
        1.. => Fixed::checked_from_int(font_height),
        _ => None,
    }
    .ok_or_else(|| {
        warn!("rejecting font height {}", font_height);
        Error::InvalidFontHeight { height: font_height }
    })?;
    let width = Fixed::checked_from_int(string_width(text, font)?).ok_or(too_wide)?;

    let half_extent = FixedPoint::new(width / 2, height / 2);
    let corner = |offset: fn(Fixed, Fixed) -> Option<Fixed>| -> Option<FixedPoint> {
        Some(FixedPoint::new(
            offset(center.x, half_extent.x)?,
            offset(center.y, half_extent.y)?,
        ))
    };
    match (corner(Fixed::checked_sub), corner(Fixed::checked_add)) {
        (Some(top_left), Some(bottom_right)) => Ok(Rectangle::new(top_left, bottom_right)),
        _ => {
            warn!("text of {} bytes doesn't fit around {}", text.len(), center);
            Err(too_wide)
        }
    }
}

/// [`text_bounds`] with [`DEFAULT_FONT_HEIGHT`].
pub fn text_bounds_default(center: FixedPoint, text: &str, font: &SpriteFont<'_>) -> Result<Rectangle> {
    text_bounds(center, text, font, DEFAULT_FONT_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point_in_rect;

    // ' ' = 4, '!' = 2, '"' = 5, '#' = 8, then digits '0'..='9' = 7 except '1' = 5
    const WIDTHS: [u8; 26] = [
        4, 2, 5, 8, 8, 8, 8, 3, 4, 4, 6, 6, 3, 6, 2, 6,
        7, 5, 7, 7, 7, 7, 7, 7, 7, 7,
    ];
    const FONT: SpriteFont<'static> = SpriteFont::new(&WIDTHS, 16);

    #[test]
    fn test_empty_string_has_zero_width() {
        assert_eq!(string_width("", &FONT), Ok(0));
    }

    #[test]
    fn test_width_is_sum_of_glyphs() {
        let text = "10 #";
        let expected: i32 = text.bytes().map(|c| i32::from(FONT.glyph_width(c).unwrap())).sum();
        assert_eq!(expected, 5 + 7 + 4 + 8);
        assert_eq!(string_width(text, &FONT), Ok(expected));
    }

    #[test]
    fn test_control_character_is_rejected() {
        assert_eq!(
            string_width("1\n2", &FONT),
            Err(Error::GlyphOutOfRange { character: b'\n', position: 1 })
        );
    }

    #[test]
    fn test_character_past_table_end_is_rejected() {
        assert_eq!(
            string_width("9:", &FONT),
            Err(Error::GlyphOutOfRange { character: b':', position: 1 })
        );
    }

    #[test]
    fn test_glyph_width_boundaries() {
        assert_eq!(FONT.glyph_width(b' '), Some(4));
        assert_eq!(FONT.glyph_width(31), None);
        assert_eq!(FONT.glyph_width(b'9'), Some(7));
    }

    #[test]
    fn test_even_width_splits_symmetrically() {
        let center = FixedPoint::from_ints(10, 40);
        let bounds = text_bounds(center, "#", &FONT, 16).unwrap();
        assert_eq!(bounds.top_left.x + bounds.bottom_right.x, center.x * 2);
        assert_eq!(bounds.top_left, FixedPoint::from_ints(6, 32));
        assert_eq!(bounds.bottom_right, FixedPoint::from_ints(14, 48));
    }

    #[test]
    fn test_odd_width_keeps_half_pixel() {
        let center = FixedPoint::from_ints(0, 40);
        let bounds = text_bounds(center, "5", &FONT, 16).unwrap();
        assert_eq!(bounds.top_left.x, Fixed::from_data(-3 * 256 - 128));
        assert_eq!(bounds.bottom_right.x, Fixed::from_data(3 * 256 + 128));
        assert_eq!(bounds.width(), Fixed::from_int(7));
        assert_eq!(bounds.top_left.x + bounds.bottom_right.x, center.x * 2);
    }

    #[test]
    fn test_sub_pixel_center_shifts_box() {
        let center = FixedPoint::new(Fixed::from_data(1), Fixed::ZERO);
        let bounds = text_bounds(center, "5", &FONT, 16).unwrap();
        assert_eq!(bounds.top_left.x, Fixed::from_data(-895));
        assert_eq!(bounds.bottom_right.x, Fixed::from_data(897));
        assert_eq!(bounds.width(), Fixed::from_int(7));
    }

    #[test]
    fn test_height_comes_from_argument() {
        let bounds = text_bounds(FixedPoint::ZERO, "0", &FONT, 8).unwrap();
        assert_eq!(bounds.height(), Fixed::from_int(8));
        let bounds = text_bounds_default(FixedPoint::ZERO, "0", &FONT).unwrap();
        assert_eq!(bounds.height(), Fixed::from_int(DEFAULT_FONT_HEIGHT));
    }

    #[test]
    fn test_center_is_inside_own_bounds() {
        let center = FixedPoint::from_ints(0, 40);
        let bounds = text_bounds_default(center, "5", &FONT).unwrap();
        assert!(point_in_rect(center, &bounds));
    }

    #[test]
    fn test_non_positive_font_height_is_rejected() {
        let center = FixedPoint::from_ints(0, 40);
        assert_eq!(
            text_bounds(center, "5", &FONT, -16),
            Err(Error::InvalidFontHeight { height: -16 })
        );
        assert_eq!(
            text_bounds(center, "5", &FONT, 0),
            Err(Error::InvalidFontHeight { height: 0 })
        );
        let bounds = text_bounds(center, "5", &FONT, 1).unwrap();
        assert!(bounds.is_canonical());
        assert!(point_in_rect(center, &bounds));
    }

    #[test]
    fn test_huge_font_height_is_rejected() {
        assert_eq!(
            text_bounds(FixedPoint::ZERO, "5", &FONT, i32::MAX),
            Err(Error::InvalidFontHeight { height: i32::MAX })
        );
    }

    #[test]
    fn test_text_wider_than_fixed_point_is_rejected() {
        // 8 px per '#', past the 23 integer bits of a Fixed
        let text = "#".repeat(1_100_000);
        assert_eq!(string_width(&text, &FONT), Ok(8_800_000));
        assert_eq!(
            text_bounds(FixedPoint::from_ints(0, 40), &text, &FONT, 16),
            Err(Error::TextTooWide { len: 1_100_000 })
        );
    }

    #[test]
    fn test_widest_text_still_has_canonical_bounds() {
        // 1_048_575 * 8 = 8_388_600, just under the limit
        let text = "#".repeat(1_048_575);
        let center = FixedPoint::ZERO;
        let bounds = text_bounds(center, &text, &FONT, 16).unwrap();
        assert!(bounds.is_canonical());
        assert_eq!(bounds.width(), Fixed::from_int(8_388_600));
        assert!(point_in_rect(center, &bounds));
    }

    #[test]
    fn test_bounds_past_coordinate_range_are_rejected() {
        let center = FixedPoint::new(Fixed::from_data(i32::MAX - 10), Fixed::ZERO);
        assert_eq!(
            text_bounds(center, "5", &FONT, 16),
            Err(Error::TextTooWide { len: 1 })
        );
    }

    #[test]
    fn test_bad_text_has_no_bounds() {
        assert!(matches!(
            text_bounds_default(FixedPoint::ZERO, "\t", &FONT),
            Err(Error::GlyphOutOfRange { character: b'\t', .. })
        ));
    }
}
