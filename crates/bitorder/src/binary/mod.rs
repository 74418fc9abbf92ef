//! Fixed-size binary values.
//!
//! A [`Binary<N>`] holds exactly `N` bytes of opaque data. Byte `b0` is always
//! the lowest memory address; endianness is a property of how bytes map to a
//! value, not of this container. Values are immutable: every operation that
//! changes the bytes returns a new instance.
//!
//! The widths used by primitives have aliases: [`Binary16`], [`Binary32`] and
//! [`Binary64`].

use core::{fmt, ptr};

use dataview::Pod;

pub use self::bits::{BitString, bits};
use crate::{
    error::{self, ConvertError, ConvertErrorKind},
    primitive::Primitive,
};

mod bits;
mod sized;

/// A 16-bit binary value.
pub type Binary16 = Binary<2>;
/// A 32-bit binary value.
pub type Binary32 = Binary<4>;
/// A 64-bit binary value.
pub type Binary64 = Binary<8>;

/// Exactly `N` bytes of binary data.
///
/// Two values are equal if and only if all their bytes are equal, and the hash
/// covers every byte.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binary<const N: usize>([u8; N]);

// SAFETY: `Binary<N>` is `#[repr(transparent)]` over `[u8; N]`.
unsafe impl<const N: usize> Pod for Binary<N> {}

impl<const N: usize> Binary<N> {
    /// The number of bytes in this value.
    pub const LEN: usize = N;

    /// A value with all bytes zero.
    pub const ZERO: Self = Self([0; N]);

    /// Creates a value holding `bytes` verbatim; `bytes[0]` becomes `b0`.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Copies `N` bytes from `bytes`, starting at `offset`.
    ///
    /// Fails with [`ConvertErrorKind::OutOfRange`] if fewer than `N` bytes
    /// are available at `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitorder::Binary32;
    ///
    /// let bin = Binary32::from_slice(&[9, 1, 2, 3, 4], 1).unwrap();
    /// assert_eq!(bin, Binary32::new(1, 2, 3, 4));
    /// assert!(Binary32::from_slice(&[1, 2, 3, 4], 1).is_err());
    /// ```
    #[track_caller]
    pub fn from_slice(bytes: &[u8], offset: usize) -> Result<Self, ConvertError> {
        error::check_range(offset, N, bytes.len())?;

        let mut array = [0; N];
        array.copy_from_slice(&bytes[offset..offset + N]);
        Ok(Self(array))
    }

    /// Copies `N` bytes starting at `ptr`.
    ///
    /// Fails with [`ConvertErrorKind::NullInput`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// Unless `ptr` is null, it must be valid for reads of `N` bytes.
    #[track_caller]
    pub unsafe fn from_ptr(ptr: *const u8) -> Result<Self, ConvertError> {
        ensure!(
            !ptr.is_null(),
            ConvertErrorKind::NullInput { what: "byte pointer" }
        );
        // SAFETY: the caller guarantees `ptr` is valid for `N` bytes, and
        // `[u8; N]` has an alignment of one.
        let array = unsafe { ptr::read(ptr.cast::<[u8; N]>()) };
        Ok(Self(array))
    }

    /// Captures the in-memory bytes of a primitive of the same width.
    ///
    /// This is a raw bit-pattern capture in machine order, not an
    /// endianness-aware conversion.
    #[must_use]
    pub fn from_native<T>(value: T) -> Self
    where
        T: Primitive<Binary = Self>,
    {
        value.to_binary()
    }

    /// Reinterprets the bytes as a primitive of the same width.
    #[must_use]
    pub fn to_native<T>(self) -> T
    where
        T: Primitive<Binary = Self>,
    {
        T::from_binary(self)
    }

    /// Returns the bytes, `b0` first.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; N] {
        self.0
    }

    /// Returns a reference to the bytes, `b0` first.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the bytes as a slice, `b0` first.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the byte at `index`, or `None` if `index >= N`.
    #[must_use]
    pub const fn get(&self, index: usize) -> Option<u8> {
        if index < N { Some(self.0[index]) } else { None }
    }

    /// Returns a new value with the bytes in reverse order.
    ///
    /// `b0` is swapped with `b(N-1)`, `b1` with `b(N-2)`, and so on.
    #[must_use]
    pub fn reverse(self) -> Self {
        crate::reverse::reverse(self)
    }

    /// Returns a value of a different width sharing the low bytes.
    ///
    /// Bytes beyond `N` are zero-filled when widening; bytes beyond `M` are
    /// discarded when narrowing.
    #[must_use]
    fn resize<const M: usize>(self) -> Binary<M> {
        let mut array = [0; M];
        let len = usize::min(N, M);
        array[..len].copy_from_slice(&self.0[..len]);
        Binary(array)
    }

    /// Renders the bits of this value, `b0` first.
    ///
    /// Each byte is printed most significant bit first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitorder::Binary16;
    ///
    /// let bin = Binary16::new(0x01, 0x80);
    /// assert_eq!(bin.bits().to_string(), "0000000110000000");
    /// assert_eq!(bin.bits().delimited(' ').to_string(), "00000001 10000000");
    /// ```
    #[must_use]
    pub fn bits(&self) -> BitString<'_> {
        bits(&self.0)
    }
}

impl<const N: usize> Default for Binary<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[u8; N]> for Binary<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Binary<N>> for [u8; N] {
    fn from(bin: Binary<N>) -> Self {
        bin.0
    }
}

impl<const N: usize> AsRef<[u8]> for Binary<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for Binary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binary{}({})", N * 8, self.bits().delimited(' '))
    }
}

impl<const N: usize> fmt::Display for Binary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash as _, Hasher as _},
    };

    use super::*;

    fn hash_of<T: core::hash::Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_constructors_agree() {
        let bytes = 0x1234_5678_u32.to_ne_bytes();
        let direct = Binary32::new(bytes[0], bytes[1], bytes[2], bytes[3]);
        let mut buffer = [0xAA; 6];
        buffer[2..].copy_from_slice(&bytes);
        let from_slice = Binary32::from_slice(&buffer, 2).unwrap();
        let from_native = Binary32::from_native(0x1234_5678_u32);
        let from_ptr = unsafe { Binary32::from_ptr(buffer.as_ptr().add(2)) }.unwrap();

        for bin in [from_slice, from_native, from_ptr] {
            assert_eq!(bin, direct);
            assert_eq!(hash_of(&bin), hash_of(&direct));
        }
    }

    #[test]
    fn test_from_slice_bounds() {
        let bytes = [1, 2, 3, 4];
        assert!(Binary32::from_slice(&bytes, 0).is_ok());
        for offset in [1, 3, 4, 5] {
            let err = Binary32::from_slice(&bytes, offset).unwrap_err();
            assert!(matches!(err.kind(), ConvertErrorKind::OutOfRange { .. }));
        }
        let err = Binary16::from_slice(&[], 0).unwrap_err();
        assert!(matches!(err.kind(), ConvertErrorKind::OutOfRange { .. }));
    }

    #[test]
    fn test_from_null_ptr() {
        let err = unsafe { Binary64::from_ptr(ptr::null()) }.unwrap_err();
        assert!(matches!(err.kind(), ConvertErrorKind::NullInput { .. }));
    }

    #[test]
    fn test_reverse() {
        let bin = Binary64::new(0, 1, 2, 3, 4, 5, 6, 7);
        assert_eq!(bin.reverse(), Binary64::new(7, 6, 5, 4, 3, 2, 1, 0));
        assert_eq!(bin.reverse().reverse(), bin);

        let bin = Binary16::new(0xAB, 0xCD);
        assert_eq!(bin.reverse().to_bytes(), [0xCD, 0xAB]);
    }

    #[test]
    fn test_native_round_trip() {
        assert_eq!(Binary16::from_native(-2_i16).to_native::<i16>(), -2);
        assert_eq!(
            Binary32::from_native(f32::MIN_POSITIVE)
                .to_native::<f32>()
                .to_bits(),
            f32::MIN_POSITIVE.to_bits()
        );
        assert_eq!(Binary64::from(u64::MAX).to_native::<u64>(), u64::MAX);
        assert_eq!(Binary32::from_native(-1_i32).to_native::<u32>(), u32::MAX);
    }

    #[test]
    fn test_get() {
        let bin = Binary16::new(3, 4);
        assert_eq!(bin.get(0), Some(3));
        assert_eq!(bin.get(1), Some(4));
        assert_eq!(bin.get(2), None);
    }

    #[test]
    fn test_fmt() {
        let bin = Binary32::new(0xFF, 0x00, 0x0F, 0x81);
        assert_eq!(bin.to_string(), "11111111000000000000111110000001");
        assert_eq!(
            format!("{bin:?}"),
            "Binary32(11111111 00000000 00001111 10000001)"
        );
    }
}
