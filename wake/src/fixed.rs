//! # Fixed-point numbers
//!
//! Positions on the handheld are kept in fixed point rather than floats, so
//! every frame computes exactly the same thing on every machine.
//!
//! [`Fixed`] is a signed 32-bit value with [`PRECISION`] fractional bits.
//! Division truncates toward zero, matching the engine's own fixed type:
//!
//! ```ignore
//! assert_eq!(Fixed::from_int(5) / 2, Fixed::from_data(640)); // 2.5
//! assert_eq!(Fixed::from_data(1) / 2, Fixed::ZERO);          // lowest bit is lost
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Number of fractional bits.
pub const PRECISION: u32 = 8;

const SCALE: i32 = 1 << PRECISION;
const FRACTION_MASK: i32 = SCALE - 1;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);

    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Fixed(value << PRECISION)
    }

    /// `None` if `value` doesn't fit once shifted into fixed point.
    #[inline]
    pub const fn checked_from_int(value: i32) -> Option<Self> {
        match value.checked_mul(SCALE) {
            Some(data) => Some(Fixed(data)),
            None => None,
        }
    }

    /// Builds a value straight from its raw representation.
    #[inline]
    pub const fn from_data(data: i32) -> Self {
        Fixed(data)
    }

    #[inline]
    pub const fn data(self) -> i32 {
        self.0
    }

    /// Integer part, truncated toward zero.
    #[inline]
    pub const fn integer(self) -> i32 {
        self.0 / SCALE
    }

    /// Raw fractional bits of the absolute value.
    #[inline]
    pub const fn fraction(self) -> i32 {
        self.0.unsigned_abs() as i32 & FRACTION_MASK
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Fixed(self.0.abs())
    }

    #[inline]
    pub const fn checked_add(self, rhs: Fixed) -> Option<Fixed> {
        match self.0.checked_add(rhs.0) {
            Some(data) => Some(Fixed(data)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_sub(self, rhs: Fixed) -> Option<Fixed> {
        match self.0.checked_sub(rhs.0) {
            Some(data) => Some(Fixed(data)),
            None => None,
        }
    }

    /// Fixed-point division that returns `None` instead of panicking on zero.
    pub fn checked_div(self, rhs: Fixed) -> Option<Fixed> {
        if rhs.0 == 0 {
            return None;
        }
        Some(self / rhs)
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Fixed::from_int(value)
    }
}

impl From<u8> for Fixed {
    fn from(value: u8) -> Self {
        Fixed::from_int(i32::from(value))
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((i64::from(self.0) * i64::from(rhs.0)) >> PRECISION) as i32)
    }
}

impl Mul<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0 * rhs)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    #[inline]
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed(((i64::from(self.0) << PRECISION) / i64::from(rhs.0)) as i32)
    }
}

/// Divides the raw value, truncating toward zero.
impl Div<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn div(self, rhs: i32) -> Fixed {
        Fixed(self.0 / rhs)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}", magnitude >> PRECISION)?;

        // 8 fractional bits never need more than 8 decimal digits
        let mut fraction = u64::from(magnitude & FRACTION_MASK as u32);
        if fraction == 0 {
            return Ok(());
        }
        f.write_str(".")?;
        while fraction != 0 {
            fraction *= 10;
            write!(f, "{}", fraction >> PRECISION)?;
            fraction &= FRACTION_MASK as u64;
        }
        Ok(())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A 2D position in fixed point.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    pub const ZERO: FixedPoint = FixedPoint::new(Fixed::ZERO, Fixed::ZERO);

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y))
    }
}

impl Add for FixedPoint {
    type Output = FixedPoint;

    fn add(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for FixedPoint {
    fn add_assign(&mut self, rhs: FixedPoint) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for FixedPoint {
    type Output = FixedPoint;

    fn sub(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for FixedPoint {
    fn sub_assign(&mut self, rhs: FixedPoint) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> FixedPoint {
        FixedPoint::new(-self.x, -self.y)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
