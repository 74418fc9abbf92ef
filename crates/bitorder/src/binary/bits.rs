use core::fmt::{self, Write as _};

/// Renders bytes as a string of `'0'` and `'1'` digits.
///
/// Bytes are printed in slice order, each most significant bit first. No
/// delimiter is printed between bytes unless one is set with
/// [`BitString::delimited`].
#[derive(Debug, Clone, Copy)]
pub struct BitString<'a> {
    bytes: &'a [u8],
    delimiter: Option<char>,
}

/// Returns a renderer for the bits of `bytes`.
///
/// # Examples
///
/// ```
/// assert_eq!(bitorder::bits(&[0x05]).to_string(), "00000101");
/// ```
#[must_use]
pub fn bits(bytes: &[u8]) -> BitString<'_> {
    BitString {
        bytes,
        delimiter: None,
    }
}

impl BitString<'_> {
    /// Prints `delimiter` between each pair of bytes.
    #[must_use]
    pub fn delimited(self, delimiter: char) -> Self {
        Self {
            delimiter: Some(delimiter),
            ..self
        }
    }

    /// Returns the number of characters this renders to.
    #[must_use]
    pub fn char_count(&self) -> usize {
        let delimiters = match self.delimiter {
            Some(_) => self.bytes.len().saturating_sub(1),
            None => 0,
        };
        self.bytes.len() * 8 + delimiters
    }
}

impl fmt::Display for BitString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if let Some(delimiter) = self.delimiter
                && i > 0
            {
                f.write_char(delimiter)?;
            }
            write!(f, "{byte:08b}")?;
        }
        Ok(())
    }
}
