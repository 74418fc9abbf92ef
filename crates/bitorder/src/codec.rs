//! Raw bit-pattern conversion between plain values and byte arrays.
//!
//! The routines here copy the in-memory representation of a value as-is:
//! index 0 of a byte array is always the lowest memory address. They never
//! adjust the byte order; see [`EndianConverter`] for that.
//!
//! [`EndianConverter`]: crate::EndianConverter

use dataview::{Pod, PodMethods as _};

use crate::error::{ConvertError, ConvertErrorKind};

#[track_caller]
fn check_size<T>(expected: usize) -> Result<(), ConvertError> {
    let actual = size_of::<T>();
    ensure!(
        actual == expected,
        ConvertErrorKind::SizeMismatch { expected, actual }
    );
    Ok(())
}

/// Returns the bytes making up `value`, in memory order.
///
/// Fails with [`ConvertErrorKind::SizeMismatch`] if `N` is not the size of
/// `T`.
///
/// # Examples
///
/// ```
/// use bitorder::{ConvertErrorKind, codec};
///
/// let bytes = codec::extract_bytes::<u16, 2>(&0x1234).unwrap();
/// assert_eq!(u16::from_ne_bytes(bytes), 0x1234);
///
/// let err = codec::extract_bytes::<u64, 4>(&0).unwrap_err();
/// assert!(matches!(err.kind(), ConvertErrorKind::SizeMismatch { expected: 4, actual: 8 }));
/// ```
#[track_caller]
pub fn extract_bytes<T, const N: usize>(value: &T) -> Result<[u8; N], ConvertError>
where
    T: Pod,
{
    check_size::<T>(N)?;
    let mut bytes = [0; N];
    bytes.copy_from_slice(value.as_bytes());
    Ok(bytes)
}

/// Reinterprets `bytes`, in memory order, as a value of type `T`.
///
/// This is a bit-pattern copy, not a numeric cast: four arbitrary bytes become
/// an `f32` with exactly that pattern. Fails with
/// [`ConvertErrorKind::SizeMismatch`] if `N` is not the size of `T`.
#[track_caller]
pub fn reconstruct<T, const N: usize>(bytes: &[u8; N]) -> Result<T, ConvertError>
where
    T: Pod,
{
    check_size::<T>(N)?;
    let mut value = T::zeroed();
    value.as_bytes_mut().copy_from_slice(bytes);
    Ok(value)
}

/// Infallible form of [`extract_bytes`] for call sites whose widths are fixed.
///
/// A width mismatch is rejected when the function is instantiated.
pub(crate) fn to_array<T, const N: usize>(value: &T) -> [u8; N]
where
    T: Pod,
{
    const { assert!(size_of::<T>() == N) };
    let mut bytes = [0; N];
    bytes.copy_from_slice(value.as_bytes());
    bytes
}

/// Infallible form of [`reconstruct`] for call sites whose widths are fixed.
pub(crate) fn from_array<T, const N: usize>(bytes: &[u8; N]) -> T
where
    T: Pod,
{
    const { assert!(size_of::<T>() == N) };
    let mut value = T::zeroed();
    value.as_bytes_mut().copy_from_slice(bytes);
    value
}
