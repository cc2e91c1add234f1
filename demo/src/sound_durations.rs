// Generated by wake-meta from sound_items_info.h at 60 fps. Do not edit.

pub const DURATIONS: [u16; 6] = [
    142, 167, 61, 149, 136, 598,
];
