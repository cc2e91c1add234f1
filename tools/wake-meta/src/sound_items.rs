//! Reading the engine's generated sound item list.
//!
//! The asset build emits a header with one entry per sound, in the form
//! `sound_item(<id>), string_view("<name>")`. Nothing else in the file matters
//! here, so it is scanned for that pattern rather than parsed as C++.

use std::collections::BTreeMap;

const ITEM_OPEN: &str = "sound_item(";
const NAME_OPEN: &str = "), string_view(\"";

/// Map of sound file stem to sound item id.
pub fn parse_sound_items(content: &str) -> BTreeMap<String, u16> {
    let mut items = BTreeMap::new();
    let mut rest = content;

    while let Some(start) = rest.find(ITEM_OPEN) {
        rest = &rest[start + ITEM_OPEN.len()..];

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let Ok(id) = rest[..digits].parse::<u16>() else {
            continue;
        };
        let Some(after) = rest[digits..].strip_prefix(NAME_OPEN) else {
            continue;
        };
        let Some(end) = after.find('"') else {
            break;
        };
        if end > 0 {
            items.insert(after[..end].to_string(), id);
        }
        rest = &after[end..];
    }

    items
}

/// One past the highest id, i.e. the length of a table indexed by id.
pub fn table_len(items: &BTreeMap<String, u16>) -> usize {
    items.values().map(|&id| usize::from(id) + 1).max().unwrap_or(0)
}
