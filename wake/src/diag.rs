//! Quick diagnostic logging.
//!
//! [`log!`](crate::log!) takes any number of `Display` values, joins them
//! with spaces and emits one `info` record:
//!
//! ```ignore
//! wake::log!("walker at", walker.position(), "frame", frame);
//! // walker at (12, 40) frame 93
//! ```
//!
//! The message lives in a fixed-size buffer, so there is no allocation.
//! Anything past [`MESSAGE_CAPACITY`] bytes is cut off.

use core::fmt::{self, Write};

use log::info;

pub const MESSAGE_CAPACITY: usize = 256;

#[derive(Debug, Default)]
pub struct Message {
    text: heapless::String<MESSAGE_CAPACITY>,
    truncated: bool,
}

impl Message {
    pub const fn new() -> Self {
        Self {
            text: heapless::String::new(),
            truncated: false,
        }
    }

    /// Append `value` and a trailing space.
    pub fn push<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        // never fails, overflow only sets `truncated`
        let _ = write!(self, "{} ", value);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn emit(&self) {
        if self.truncated {
            info!("{}...", self.text);
        } else {
            info!("{}", self.text);
        }
    }
}

impl Write for Message {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.text.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Log any number of `Display` values separated by spaces, at `info` level.
#[macro_export]
macro_rules! log {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut message = $crate::diag::Message::new();
        $( message.push(&$value); )*
        message.emit();
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedPoint;

    #[test]
    fn test_values_joined_with_spaces() {
        let mut message = Message::new();
        message.push("walker at");
        message.push(&FixedPoint::from_ints(3, 40));
        message.push(&7);
        assert_eq!(message.as_str(), "walker at (3, 40) 7 ");
        assert!(!message.is_truncated());
    }

    #[test]
    fn test_no_values() {
        let message = Message::new();
        assert_eq!(message.as_str(), "");
        message.emit();
        crate::log!();
    }

    #[test]
    fn test_many_values_truncate() {
        let mut message = Message::new();
        for n in 0..1000 {
            message.push(&n);
        }
        assert!(message.is_truncated());
        assert_eq!(message.as_str().len(), MESSAGE_CAPACITY);
        message.emit();
    }

    #[test]
    fn test_macro_accepts_mixed_values() {
        crate::log!("frame", 12, FixedPoint::ZERO, 'x',);
    }
}
