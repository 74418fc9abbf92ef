use core::fmt;

use crate::error::{ConvertError, ConvertErrorKind};

/// The order in which the bytes of a multi-byte value are stored.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Endianness {
    /// Least significant byte first.
    Little = 0,
    /// Most significant byte first.
    Big = 1,
}

cfg_if::cfg_if! {
    if #[cfg(target_endian = "little")] {
        const NATIVE: Endianness = Endianness::Little;
    } else {
        const NATIVE: Endianness = Endianness::Big;
    }
}

impl Endianness {
    /// The byte order of the target this crate is compiled for.
    pub const NATIVE: Self = NATIVE;

    /// Returns `true` if this is the byte order of the compilation target.
    #[must_use]
    pub const fn is_native(self) -> bool {
        self as u8 == Self::NATIVE as u8
    }

    /// Returns the opposite byte order.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little-endian"),
            Self::Big => f.write_str("big-endian"),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        value as Self
    }
}

impl TryFrom<i64> for Endianness {
    type Error = ConvertError;

    #[track_caller]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Little),
            1 => Ok(Self::Big),
            _ => bail!(ConvertErrorKind::InvalidEnum { value }),
        }
    }
}

impl TryFrom<i32> for Endianness {
    type Error = ConvertError;

    #[track_caller]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for Endianness {
    type Error = ConvertError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}
