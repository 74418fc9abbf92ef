//! Endianness-aware conversion between primitives and bytes.

use dataview::PodMethods as _;

use crate::{
    endianness::Endianness,
    error::{self, ConvertError},
    primitive::{Primitive, ValueClass},
    reverse,
};

/// Converts primitives to and from bytes in a fixed byte order.
///
/// A converter is bound to one byte order for integers (and characters) and
/// one for floating-point numbers. Bytes are reversed only when the bound
/// order differs from the native order, so `decode(encode(v)) == v` holds for
/// every value and every converter.
///
/// Converters hold no mutable state and can be shared freely.
///
/// # Examples
///
/// ```
/// use bitorder::{Binary16, EndianConverter};
///
/// let bin = EndianConverter::BIG.encode(0x0100_u16);
/// assert_eq!(bin, Binary16::new(0x01, 0x00));
/// assert_eq!(EndianConverter::BIG.decode::<u16>(bin), 0x0100);
///
/// let bin = EndianConverter::LITTLE.encode(0x0100_u16);
/// assert_eq!(bin, Binary16::new(0x00, 0x01));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndianConverter {
    integer_order: Endianness,
    float_order: Endianness,
    native_order: Endianness,
}

impl Default for EndianConverter {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl EndianConverter {
    /// Stores every value least significant byte first.
    pub const LITTLE: Self = Self::new(Endianness::Little, Endianness::Little);

    /// Stores every value most significant byte first.
    pub const BIG: Self = Self::new(Endianness::Big, Endianness::Big);

    /// Stores every value in the native byte order; never reverses bytes.
    pub const NATIVE: Self = Self::new(Endianness::NATIVE, Endianness::NATIVE);

    /// Creates a converter with the given integer and floating-point orders.
    #[must_use]
    pub const fn new(integer_order: Endianness, float_order: Endianness) -> Self {
        Self {
            integer_order,
            float_order,
            native_order: Endianness::NATIVE,
        }
    }

    /// Creates a converter from raw byte order values.
    ///
    /// `0` means little-endian and `1` big-endian; anything else fails with
    /// [`ConvertErrorKind::InvalidEnum`].
    ///
    /// [`ConvertErrorKind::InvalidEnum`]: crate::ConvertErrorKind::InvalidEnum
    #[track_caller]
    pub fn from_raw(integer_order: i32, float_order: i32) -> Result<Self, ConvertError> {
        let integer_order = Endianness::try_from(integer_order)?;
        let float_order = Endianness::try_from(float_order)?;
        Ok(Self::new(integer_order, float_order))
    }

    /// Returns a copy of this converter that treats `native_order` as the
    /// byte order of the running machine.
    ///
    /// Useful for exercising the reversing paths on any host.
    #[must_use]
    pub const fn with_native_order(self, native_order: Endianness) -> Self {
        Self {
            native_order,
            ..self
        }
    }

    /// Returns the byte order used for integers and characters.
    #[must_use]
    pub const fn integer_order(&self) -> Endianness {
        self.integer_order
    }

    /// Returns the byte order used for floating-point numbers.
    #[must_use]
    pub const fn float_order(&self) -> Endianness {
        self.float_order
    }

    /// Returns the byte order this converter assumes the machine uses.
    #[must_use]
    pub const fn native_order(&self) -> Endianness {
        self.native_order
    }

    /// Returns the byte order applied to values of `class`.
    #[must_use]
    pub const fn order_of(&self, class: ValueClass) -> Endianness {
        match class {
            ValueClass::Integer => self.integer_order,
            ValueClass::Float => self.float_order,
        }
    }

    /// Returns `true` if values of `class` have their bytes reversed.
    #[must_use]
    pub const fn reverses(&self, class: ValueClass) -> bool {
        self.order_of(class) as u8 != self.native_order as u8
    }

    fn adjust<T>(&self, binary: T::Binary) -> T::Binary
    where
        T: Primitive,
    {
        if self.reverses(T::CLASS) {
            reverse::reverse(binary)
        } else {
            binary
        }
    }

    /// Returns the bytes of `value` in this converter's byte order.
    #[must_use]
    pub fn encode<T>(&self, value: T) -> T::Binary
    where
        T: Primitive,
    {
        self.adjust::<T>(value.to_binary())
    }

    /// Reads a value from bytes in this converter's byte order.
    #[must_use]
    pub fn decode<T>(&self, binary: T::Binary) -> T
    where
        T: Primitive,
    {
        T::from_binary(self.adjust::<T>(binary))
    }

    /// Writes the bytes of `value` into `buffer` at `offset`.
    ///
    /// Fails with [`ConvertErrorKind::OutOfRange`] if the value does not fit;
    /// the buffer is left unmodified in that case.
    ///
    /// [`ConvertErrorKind::OutOfRange`]: crate::ConvertErrorKind::OutOfRange
    #[track_caller]
    pub fn write<T>(&self, value: T, buffer: &mut [u8], offset: usize) -> Result<(), ConvertError>
    where
        T: Primitive,
    {
        let binary = self.encode(value);
        let bytes = binary.as_bytes();
        error::check_range(offset, bytes.len(), buffer.len())?;
        buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Reads a value from `buffer` at `offset`.
    ///
    /// Fails with [`ConvertErrorKind::OutOfRange`] if the buffer is too short.
    ///
    /// [`ConvertErrorKind::OutOfRange`]: crate::ConvertErrorKind::OutOfRange
    #[track_caller]
    pub fn read<T>(&self, buffer: &[u8], offset: usize) -> Result<T, ConvertError>
    where
        T: Primitive,
    {
        let mut binary = T::Binary::zeroed();
        let bytes = binary.as_bytes_mut();
        error::check_range(offset, bytes.len(), buffer.len())?;
        bytes.copy_from_slice(&buffer[offset..offset + bytes.len()]);
        Ok(self.decode(binary))
    }

    /// Returns the single byte representing `value`: `1` for `true`, `0` for
    /// `false`.
    #[must_use]
    pub const fn encode_bool(&self, value: bool) -> u8 {
        value as u8
    }

    /// Reads a boolean; any non-zero byte is `true`.
    #[must_use]
    pub const fn decode_bool(&self, byte: u8) -> bool {
        byte != 0
    }

    /// Returns the two's complement byte of `value`.
    #[must_use]
    pub const fn encode_i8(&self, value: i8) -> u8 {
        u8::from_ne_bytes(value.to_ne_bytes())
    }

    /// Reads a two's complement byte.
    #[must_use]
    pub const fn decode_i8(&self, byte: u8) -> i8 {
        i8::from_ne_bytes(byte.to_ne_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ConvertErrorKind,
        binary::{Binary16, Binary32, Binary64},
        primitive::Char16,
    };

    #[test]
    fn test_native_never_reverses() {
        let conv = EndianConverter::default();
        assert_eq!(conv, EndianConverter::NATIVE);
        assert!(!conv.reverses(ValueClass::Integer));
        assert!(!conv.reverses(ValueClass::Float));
        assert_eq!(conv.encode(0x1234_u16), Binary16::from_native(0x1234_u16));
    }

    #[test]
    fn test_literal_vectors() {
        for conv in [
            EndianConverter::BIG,
            EndianConverter::new(Endianness::Big, Endianness::Big),
            EndianConverter::BIG.with_native_order(Endianness::NATIVE),
        ] {
            assert_eq!(conv.encode(256_u16).to_bytes(), [0x01, 0x00]);
            assert_eq!(
                conv.encode(i32::MAX).to_bytes(),
                [0x7F, 0xFF, 0xFF, 0xFF]
            );
            assert_eq!(conv.encode(1.0_f32).to_bytes(), [0x3F, 0x80, 0x00, 0x00]);
            assert_eq!(
                conv.encode(-1.0_f64).to_bytes(),
                [0xBF, 0xF0, 0, 0, 0, 0, 0, 0]
            );
        }
        assert_eq!(EndianConverter::LITTLE.encode(256_u16).to_bytes(), [0x00, 0x01]);
    }

    #[test]
    fn test_overridden_native_order() {
        let conv = EndianConverter::LITTLE.with_native_order(Endianness::Big);
        assert!(conv.reverses(ValueClass::Integer));
        assert_eq!(conv.native_order(), Endianness::Big);
        let bin = Binary32::from_native(0x0102_0304_u32);
        assert_eq!(conv.encode(0x0102_0304_u32), bin.reverse());
        assert_eq!(conv.decode::<u32>(bin.reverse()), 0x0102_0304);
    }

    #[test]
    fn test_mixed_orders() {
        let conv = EndianConverter::new(Endianness::Big, Endianness::Little);
        assert_eq!(conv.order_of(ValueClass::Integer), Endianness::Big);
        assert_eq!(conv.order_of(ValueClass::Float), Endianness::Little);
        assert_eq!(conv.encode(1_u32).to_bytes(), [0, 0, 0, 1]);
        assert_eq!(conv.encode(1.0_f32).to_bytes(), [0x00, 0x00, 0x80, 0x3F]);
        assert_eq!(
            conv.encode(Char16::new(0x0041)),
            Binary16::new(0x00, 0x41)
        );
    }

    #[test]
    fn test_from_raw() {
        let conv = EndianConverter::from_raw(1, 0).unwrap();
        assert_eq!(conv.integer_order(), Endianness::Big);
        assert_eq!(conv.float_order(), Endianness::Little);

        let err = EndianConverter::from_raw(0, 2).unwrap_err();
        assert_eq!(*err.kind(), ConvertErrorKind::InvalidEnum { value: 2 });
        let err = EndianConverter::from_raw(-1, 0).unwrap_err();
        assert_eq!(*err.kind(), ConvertErrorKind::InvalidEnum { value: -1 });
    }

    #[test]
    fn test_single_byte_values() {
        for conv in [EndianConverter::LITTLE, EndianConverter::BIG] {
            assert_eq!(conv.encode_bool(true), 1);
            assert_eq!(conv.encode_bool(false), 0);
            assert!(conv.decode_bool(0x80));
            assert!(!conv.decode_bool(0));
            assert_eq!(conv.encode_i8(-128), 0x80);
            assert_eq!(conv.encode_i8(-1), 0xFF);
            assert_eq!(conv.decode_i8(0x7F), 127);
            assert_eq!(conv.decode_i8(0xFF), -1);
        }
    }

    #[test]
    fn test_write_read() {
        let conv = EndianConverter::BIG;
        let mut buf = [0_u8; 10];
        conv.write(0x0102_0304_0506_0708_u64, &mut buf, 1).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(conv.read::<u64>(&buf, 1).unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(conv.read::<u16>(&buf, 8).unwrap(), 0x0800);

        let err = conv.write(1_u32, &mut buf, 7).unwrap_err();
        assert!(matches!(err.kind(), ConvertErrorKind::OutOfRange { .. }));
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let err = conv.read::<f64>(&buf, 3).unwrap_err();
        assert!(matches!(err.kind(), ConvertErrorKind::OutOfRange { .. }));
        assert!(conv.read::<i16>(&buf, 10).is_err());
    }

    #[test]
    fn test_decode_reverses_encode() {
        let conv = EndianConverter::BIG;
        let bin = Binary64::new(0x80, 0, 0, 0, 0, 0, 0, 0);
        assert_eq!(conv.decode::<i64>(bin), i64::MIN);
        assert_eq!(conv.encode(i64::MIN), bin);
    }
}
