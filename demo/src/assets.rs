//! Fonts, sounds and text used by the scene.

use wake::{SoundItem, SpriteFont};

/// Glyph widths of the variable width 8x16 sprite font, `' '` to `'~'`.
pub static VARIABLE_8X16_WIDTHS: [u8; 95] = [
    // ' ' ! " # $ % & ' ( ) * + , - . /
    4, 2, 4, 8, 6, 8, 7, 2, 4, 4, 6, 6, 3, 5, 2, 6,
    // 0 - 9
    7, 5, 7, 7, 7, 7, 7, 7, 7, 7,
    // : ; < = > ? @
    2, 3, 5, 6, 5, 6, 8,
    // A - Z
    7, 7, 7, 7, 6, 6, 7, 7, 4, 6, 7, 6, 8, 7, 7, 7, 7, 7, 7, 6, 7, 7, 8, 7, 6, 6,
    // [ \ ] ^ _ `
    4, 6, 4, 6, 6, 3,
    // a - z
    6, 6, 6, 6, 6, 5, 6, 6, 2, 4, 6, 3, 8, 6, 6, 6, 6, 5, 6, 5, 6, 6, 8, 6, 6, 6,
    // { | } ~
    5, 2, 5, 7,
];

pub const VARIABLE_8X16_FONT: SpriteFont<'static> = SpriteFont::new(&VARIABLE_8X16_WIDTHS, 16);

/// Sound items, in the order the engine numbers them.
pub mod sound_items {
    use super::SoundItem;

    pub const LINE_0: SoundItem = SoundItem::new(0);
    pub const LINE_1: SoundItem = SoundItem::new(1);
    pub const LINE_2: SoundItem = SoundItem::new(2);
    pub const LINE_3: SoundItem = SoundItem::new(3);
    pub const LINE_4: SoundItem = SoundItem::new(4);
    pub const RIVERRUN_DEMO: SoundItem = SoundItem::new(5);

    /// Narration of the info text, one clip per line.
    pub const NARRATION: [SoundItem; 5] = [LINE_0, LINE_1, LINE_2, LINE_3, LINE_4];
}

pub const INFO_TEXT_LINES: [&str; 5] = [
    "riverrun, past Eve and Adam's",
    "from swerve of shore to bend of bay",
    "brings us by",
    "a commodius vicus of recirculation",
    "back to Howth Castle and Environs",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound_durations::DURATIONS;

    #[test]
    fn test_font_covers_printable_ascii() {
        for c in b' '..=b'~' {
            assert!(VARIABLE_8X16_FONT.glyph_width(c).is_some(), "no glyph for {:?}", c as char);
        }
        assert_eq!(VARIABLE_8X16_FONT.glyph_width(0x7F), None);
    }

    #[test]
    fn test_info_text_is_measurable() {
        for line in INFO_TEXT_LINES {
            assert!(wake::string_width(line, &VARIABLE_8X16_FONT).unwrap() > 0);
        }
    }

    #[test]
    fn test_every_sound_item_has_a_duration() {
        assert!(usize::from(sound_items::RIVERRUN_DEMO.id()) < DURATIONS.len());
        assert!(DURATIONS.iter().all(|&frames| frames > 0));
    }

    #[test]
    fn test_durations_look_up_through_table() {
        let table = wake::DurationTable::new(&DURATIONS);
        assert_eq!(table.duration(sound_items::LINE_0), Some(142));
        assert_eq!(table.duration(sound_items::RIVERRUN_DEMO), Some(598));
        assert_eq!(table.duration(wake::SoundItem::new(6)), None);
    }
}
