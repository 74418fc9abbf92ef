//! Byte order reversal for buffers and plain values.

use core::slice;

use dataview::{Pod, PodMethods as _};

use crate::error::{self, ConvertError, ConvertErrorKind};

/// Swaps bytes pairwise from both ends towards the middle.
fn swap_ends(bytes: &mut [u8]) {
    let Some(upper) = bytes.len().checked_sub(1) else {
        return;
    };
    for i in 0..bytes.len() / 2 {
        bytes.swap(i, upper - i);
    }
}

/// Reverses the whole buffer in place.
///
/// Buffers of zero or one byte are left untouched.
pub fn reverse_in_place(buffer: &mut [u8]) {
    buffer.reverse();
}

/// Reverses `count` bytes of `buffer` starting at `offset`, in place.
///
/// Fails with [`ConvertErrorKind::OutOfRange`] if `offset..offset + count` is
/// not a range of `buffer`; the buffer is left unmodified in that case. A
/// `count` of zero is a no-op.
///
/// # Examples
///
/// ```
/// let mut buf = [1, 2, 3, 4, 5];
/// bitorder::reverse::reverse_range(&mut buf, 1, 3).unwrap();
/// assert_eq!(buf, [1, 4, 3, 2, 5]);
///
/// assert!(bitorder::reverse::reverse_range(&mut buf, 3, 3).is_err());
/// ```
#[track_caller]
pub fn reverse_range(buffer: &mut [u8], offset: usize, count: usize) -> Result<(), ConvertError> {
    error::check_range(offset, count, buffer.len())?;

    if offset == 0 && count == buffer.len() {
        reverse_in_place(buffer);
    } else {
        swap_ends(&mut buffer[offset..offset + count]);
    }
    Ok(())
}

/// Reverses `count` bytes starting at `ptr`, in place.
///
/// Fails with [`ConvertErrorKind::NullInput`] if `ptr` is null.
///
/// # Safety
///
/// Unless `count` is zero, `ptr` must be valid for reads and writes of `count`
/// bytes, and no other reference may access that memory during the call.
#[track_caller]
pub unsafe fn reverse_raw(ptr: *mut u8, count: usize) -> Result<(), ConvertError> {
    ensure!(
        !ptr.is_null(),
        ConvertErrorKind::NullInput { what: "byte pointer" }
    );
    if count == 0 {
        return Ok(());
    }
    // SAFETY: the caller guarantees `ptr` is valid for `count` bytes.
    let bytes = unsafe { slice::from_raw_parts_mut(ptr, count) };
    swap_ends(bytes);
    Ok(())
}

/// Returns `value` with the order of its bytes reversed.
///
/// # Examples
///
/// ```
/// assert_eq!(bitorder::reverse::reverse(0x1234_u16), 0x3412);
/// ```
#[must_use]
pub fn reverse<T>(mut value: T) -> T
where
    T: Pod,
{
    swap_ends(value.as_bytes_mut());
    value
}
