use super::{Binary16, Binary32, Binary64};

macro_rules! impl_byte_fields {
    ($(#[$attr:meta])* $ty:ty { $($idx:literal => $field:ident),+ }) => {
        impl $ty {
            /// Creates a value from its bytes, `b0` being the lowest address.
            $(#[$attr])*
            #[must_use]
            pub const fn new($($field: u8),+) -> Self {
                Self([$($field),+])
            }

            $(
                #[doc = concat!("Returns byte ", stringify!($idx), ".")]
                #[must_use]
                pub const fn $field(&self) -> u8 {
                    self.0[$idx]
                }
            )+
        }
    };
}

impl_byte_fields!(Binary16 { 0 => b0, 1 => b1 });
impl_byte_fields!(Binary32 { 0 => b0, 1 => b1, 2 => b2, 3 => b3 });
impl_byte_fields!(#[expect(clippy::too_many_arguments)] Binary64 {
    0 => b0, 1 => b1, 2 => b2, 3 => b3, 4 => b4, 5 => b5, 6 => b6, 7 => b7
});

impl Binary16 {
    /// Embeds this value in the low bytes of a [`Binary32`].
    #[must_use]
    pub fn widen_to_32(self) -> Binary32 {
        self.resize()
    }

    /// Embeds this value in the low bytes of a [`Binary64`].
    #[must_use]
    pub fn widen_to_64(self) -> Binary64 {
        self.resize()
    }
}

impl Binary32 {
    /// Joins two halves; `low` occupies bytes `b0..b1`.
    #[must_use]
    pub fn from_halves(low: Binary16, high: Binary16) -> Self {
        Self::new(low.b0(), low.b1(), high.b0(), high.b1())
    }

    /// Returns bytes `b0..b1`.
    #[must_use]
    pub fn low(self) -> Binary16 {
        self.resize()
    }

    /// Returns bytes `b2..b3`.
    #[must_use]
    pub fn high(self) -> Binary16 {
        Binary16::new(self.b2(), self.b3())
    }

    /// Keeps bytes `b0..b1` and discards the rest.
    #[must_use]
    pub fn narrow_to_16(self) -> Binary16 {
        self.resize()
    }

    /// Embeds this value in the low bytes of a [`Binary64`].
    #[must_use]
    pub fn widen_to_64(self) -> Binary64 {
        self.resize()
    }
}

impl Binary64 {
    /// Joins two halves; `low` occupies bytes `b0..b3`.
    #[must_use]
    pub fn from_halves(low: Binary32, high: Binary32) -> Self {
        let (l, h) = (low.to_bytes(), high.to_bytes());
        Self::new(l[0], l[1], l[2], l[3], h[0], h[1], h[2], h[3])
    }

    /// Returns bytes `b0..b3`.
    #[must_use]
    pub fn low(self) -> Binary32 {
        self.resize()
    }

    /// Returns bytes `b4..b7`.
    #[must_use]
    pub fn high(self) -> Binary32 {
        Binary32::new(self.b4(), self.b5(), self.b6(), self.b7())
    }

    /// Keeps bytes `b0..b1` and discards the rest.
    #[must_use]
    pub fn narrow_to_16(self) -> Binary16 {
        self.resize()
    }

    /// Keeps bytes `b0..b3` and discards the rest.
    #[must_use]
    pub fn narrow_to_32(self) -> Binary32 {
        self.resize()
    }
}
