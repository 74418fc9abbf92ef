//! Primitive types that can be converted to and from fixed-size binary
//! values.

use dataview::Pod;

use crate::{
    binary::{Binary, Binary16, Binary32, Binary64},
    codec,
};

/// Selects which byte order of an [`EndianConverter`] applies to a type.
///
/// [`EndianConverter`]: crate::EndianConverter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ValueClass {
    /// Integers and characters.
    Integer,
    /// IEEE 754 floating-point numbers.
    Float,
}

mod sealed {
    pub trait Sealed {}
}

/// A multi-byte primitive with a fixed in-memory width.
///
/// This trait is sealed; it is implemented for `u16`, `i16`, [`Char16`],
/// `u32`, `i32`, `f32`, `u64`, `i64` and `f64`.
pub trait Primitive: Pod + Copy + sealed::Sealed {
    /// Which byte order of a converter applies to this type.
    const CLASS: ValueClass;

    /// The binary value of the same width.
    type Binary: Pod + Copy;

    /// Captures the in-memory bytes of `self`, in machine order.
    #[must_use]
    fn to_binary(self) -> Self::Binary;

    /// Reinterprets the bytes of `binary`, in machine order, as `Self`.
    #[must_use]
    fn from_binary(binary: Self::Binary) -> Self;
}

macro_rules! impl_primitive {
    ($class:ident, $bin:ty => $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                const CLASS: ValueClass = ValueClass::$class;

                type Binary = $bin;

                fn to_binary(self) -> $bin {
                    Binary::from_bytes(codec::to_array(&self))
                }

                fn from_binary(binary: $bin) -> Self {
                    codec::from_array(binary.as_array())
                }
            }

            impl From<$t> for $bin {
                fn from(value: $t) -> Self {
                    value.to_binary()
                }
            }
        )+
    };
}

impl_primitive!(Integer, Binary16 => u16, i16, Char16);
impl_primitive!(Integer, Binary32 => u32, i32);
impl_primitive!(Integer, Binary64 => u64, i64);
impl_primitive!(Float, Binary32 => f32);
impl_primitive!(Float, Binary64 => f64);

/// A 16-bit character: a single UTF-16 code unit.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod)]
pub struct Char16(u16);

impl Char16 {
    /// Creates a character from its UTF-16 code unit.
    #[must_use]
    pub const fn new(unit: u16) -> Self {
        Self(unit)
    }

    /// Returns the UTF-16 code unit.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Converts a `char` from the Basic Multilingual Plane.
    ///
    /// Returns `None` for characters that need a surrogate pair.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        u16::try_from(u32::from(c)).ok().map(Self)
    }

    /// Converts back to a `char`.
    ///
    /// Returns `None` if the code unit is a lone surrogate.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl From<u16> for Char16 {
    fn from(unit: u16) -> Self {
        Self(unit)
    }
}

impl From<Char16> for u16 {
    fn from(c: Char16) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(u16::CLASS.is_integer());
        assert!(Char16::CLASS.is_integer());
        assert!(i64::CLASS.is_integer());
        assert!(f32::CLASS.is_float());
        assert!(f64::CLASS.is_float());
    }

    #[test]
    fn test_binary_round_trip() {
        assert_eq!(u32::from_binary(0xDEAD_BEEF_u32.to_binary()), 0xDEAD_BEEF);
        assert_eq!(i16::from_binary(i16::MIN.to_binary()), i16::MIN);
        assert_eq!(
            f64::from_binary(f64::MAX.to_binary()).to_bits(),
            f64::MAX.to_bits()
        );
        assert_eq!(
            Binary16::from(0x0102_u16).to_bytes(),
            0x0102_u16.to_ne_bytes()
        );
    }

    #[test]
    fn test_char16() {
        let a = Char16::from_char('a').unwrap();
        assert_eq!(a.get(), 0x61);
        assert_eq!(a.to_char(), Some('a'));
        assert_eq!(Char16::from_char('\u{FFFF}').map(Char16::get), Some(0xFFFF));
        assert_eq!(Char16::from_char('\u{1F600}'), None);
        assert_eq!(Char16::new(0xD800).to_char(), None);
        assert_eq!(u16::from(Char16::from(0x1234)), 0x1234);
    }
}
