use bitflags::bitflags;

/// Key input register. Active low: a cleared bit means the key is down.
#[cfg(all(target_arch = "arm", target_os = "none"))]
const KEYINPUT: *const u16 = 0x0400_0130 as *const u16;

bitflags! {
    /// Set of keys, laid out like the hardware key input register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct Keys: u16 {
        const A      = 0b00_0000_0001;
        const B      = 0b00_0000_0010;
        const SELECT = 0b00_0000_0100;
        const START  = 0b00_0000_1000;
        const RIGHT  = 0b00_0001_0000;
        const LEFT   = 0b00_0010_0000;
        const UP     = 0b00_0100_0000;
        const DOWN   = 0b00_1000_0000;
        const R      = 0b01_0000_0000;
        const L      = 0b10_0000_0000;
    }
}

impl Keys {
    /// Decode a raw (active low) register value.
    #[inline]
    pub const fn from_register(raw: u16) -> Self {
        Keys::from_bits_truncate(!raw)
    }

    /// Read the keys currently held on hardware.
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    #[inline(always)]
    pub fn read() -> Self {
        Self::from_register(unsafe { core::ptr::read_volatile(KEYINPUT) })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
}

impl Button {
    pub const fn keys(&self) -> Keys {
        match self {
            Button::A => Keys::A,
            Button::B => Keys::B,
            Button::Select => Keys::SELECT,
            Button::Start => Keys::START,

            Button::Right => Keys::RIGHT,
            Button::Left => Keys::LEFT,
            Button::Up => Keys::UP,
            Button::Down => Keys::DOWN,

            Button::R => Keys::R,
            Button::L => Keys::L,
        }
    }
}

/// Keypad state for one frame, plus the frame before it for edges.
///
/// `A` is confirm and `Start` is cancel, as in the engine's menus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub held: Keys,
    pub held_last: Keys,
}

impl FrameInput {
    pub const fn new() -> Self {
        Self {
            held: Keys::empty(),
            held_last: Keys::empty(),
        }
    }

    pub const fn from_keys(held: Keys, held_last: Keys) -> Self {
        Self { held, held_last }
    }

    /// Shift this frame's keys into the previous slot and store `held`.
    #[inline]
    pub fn poll(&mut self, held: Keys) {
        self.held_last = self.held;
        self.held = held;
    }

    #[inline]
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(button.keys())
    }

    #[inline]
    pub fn was_held(&self, button: Button) -> bool {
        self.held_last.contains(button.keys())
    }

    /// True only on the frame the button went down.
    #[inline]
    pub fn pressed(&self, button: Button) -> bool {
        self.is_held(button) && !self.was_held(button)
    }

    /// True only on the frame the button came up.
    #[inline]
    pub fn released(&self, button: Button) -> bool {
        !self.is_held(button) && self.was_held(button)
    }

    #[inline]
    pub fn confirm_pressed(&self) -> bool {
        self.pressed(Button::A)
    }

    #[inline]
    pub fn cancel_pressed(&self) -> bool {
        self.pressed(Button::Start)
    }
}
