//! Errors reported by the conversion routines.
//!
//! Every public operation validates its arguments before touching any byte,
//! so a returned error guarantees that no buffer was modified.

use core::{error::Error, fmt};
#[cfg(feature = "error-with-location")]
use core::panic::Location;

/// The kinds of errors that can occur while converting values to or from
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[non_exhaustive]
pub enum ConvertErrorKind {
    /// A required byte source was absent.
    #[display("null {what} given")]
    NullInput { what: &'static str },
    /// An offset and count do not describe a valid range of the buffer.
    #[display("range out of bounds: offset={offset}, count={count}, len={len}")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
    /// A value type does not have the declared byte width.
    #[display("size mismatch: expected {expected} bytes, actual {actual} bytes")]
    SizeMismatch { expected: usize, actual: usize },
    /// A raw value does not name a byte order.
    #[display("invalid endianness value: {value}")]
    InvalidEnum { value: i64 },
}

impl ConvertErrorKind {
    pub(crate) fn out_of_range(offset: usize, count: usize, len: usize) -> Self {
        Self::OutOfRange { offset, count, len }
    }
}

/// The error type returned by fallible conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    #[cfg(feature = "error-with-location")]
    location: &'static Location<'static>,
    kind: ConvertErrorKind,
}

impl ConvertError {
    /// Creates a new error from a known kind of error.
    #[track_caller]
    #[must_use]
    pub fn new(kind: ConvertErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "error-with-location")]
            location: Location::caller(),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ConvertErrorKind {
        &self.kind
    }

    /// Returns the location where this error was created.
    #[must_use]
    #[cfg(feature = "error-with-location")]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ConvertErrorKind> for ConvertError {
    #[track_caller]
    fn from(kind: ConvertErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.kind.source()
    }

    #[cfg(feature = "unstable-provider-api")]
    fn provide<'a>(&'a self, request: &mut core::error::Request<'a>) {
        #[cfg(feature = "error-with-location")]
        request.provide_ref(self.location());
    }
}

/// Checks that `offset..offset + count` lies within a buffer of `len` bytes.
///
/// An empty range is accepted at any offset up to and including `len`.
#[track_caller]
pub(crate) fn check_range(offset: usize, count: usize, len: usize) -> Result<(), ConvertError> {
    let end = offset.checked_add(count);
    ensure!(
        end.is_some_and(|end| end <= len),
        ConvertErrorKind::out_of_range(offset, count, len)
    );
    Ok(())
}
