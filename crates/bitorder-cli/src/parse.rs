use std::{fmt, num::ParseIntError, str::FromStr};

use arrayvec::ArrayVec;
use bitorder::{Char16, Endianness};
use snafu::{OptionExt as _, ResultExt as _, ensure_whatever, whatever};

use crate::error::GenericError;

/// The widest value the tool converts.
pub const MAX_WIDTH: usize = 8;

/// Bytes of a single value.
pub type ValueBytes = ArrayVec<u8, MAX_WIDTH>;

/// A byte order selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Little,
    Big,
    Native,
}

impl Order {
    pub fn endianness(self) -> Endianness {
        match self {
            Self::Little => Endianness::Little,
            Self::Big => Endianness::Big,
            Self::Native => Endianness::NATIVE,
        }
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" | "network" => Ok(Self::Big),
            "native" | "ne" => Ok(Self::Native),
            _ => Err(format!(
                "unknown byte order `{s}`, expected little, big or native"
            )),
        }
    }
}

/// A primitive type name accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    I8,
    I16,
    U16,
    Char16,
    I32,
    U32,
    F32,
    I64,
    U64,
    F64,
}

impl ValueType {
    pub fn width(self) -> usize {
        match self {
            Self::Bool | Self::I8 => 1,
            Self::I16 | Self::U16 | Self::Char16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "bool" => Self::Bool,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "u16" => Self::U16,
            "char16" | "char" => Self::Char16,
            "i32" => Self::I32,
            "u32" => Self::U32,
            "f32" => Self::F32,
            "i64" => Self::I64,
            "u64" => Self::U64,
            "f64" => Self::F64,
            _ => return Err(format!("unknown value type `{s}`")),
        };
        Ok(ty)
    }
}

/// A parsed primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    U16(u16),
    Char16(Char16),
    I32(i32),
    U32(u32),
    F32(f32),
    I64(i64),
    U64(u64),
    F64(f64),
}

/// Parses an integer in decimal, or in hex with a `0x` prefix.
fn parse_int<T>(s: &str, from_hex: fn(&str, u32) -> Result<T, ParseIntError>) -> Result<T, GenericError>
where
    T: FromStr<Err = ParseIntError>,
{
    let result = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => from_hex(hex, 16),
        None => s.parse(),
    };
    result.with_whatever_context(|_| format!("invalid integer `{s}`"))
}

fn parse_float<T>(s: &str) -> Result<T, GenericError>
where
    T: FromStr<Err = std::num::ParseFloatError>,
{
    s.parse()
        .with_whatever_context(|_| format!("invalid floating-point number `{s}`"))
}

fn parse_char16(s: &str) -> Result<Char16, GenericError> {
    if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        let unit = u16::from_str_radix(hex, 16)
            .with_whatever_context(|_| format!("invalid code unit `{s}`"))?;
        return Ok(Char16::new(unit));
    }
    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        whatever!("expected a single character or U+XXXX, got `{s}`");
    };
    Char16::from_char(c)
        .with_whatever_context(|| format!("character `{c}` does not fit in 16 bits"))
}

impl Value {
    pub fn parse(ty: ValueType, s: &str) -> Result<Self, GenericError> {
        let value = match ty {
            ValueType::Bool => match s {
                "true" | "1" => Self::Bool(true),
                "false" | "0" => Self::Bool(false),
                _ => whatever!("invalid boolean `{s}`, expected true or false"),
            },
            ValueType::I8 => Self::I8(parse_int(s, i8::from_str_radix)?),
            ValueType::I16 => Self::I16(parse_int(s, i16::from_str_radix)?),
            ValueType::U16 => Self::U16(parse_int(s, u16::from_str_radix)?),
            ValueType::Char16 => Self::Char16(parse_char16(s)?),
            ValueType::I32 => Self::I32(parse_int(s, i32::from_str_radix)?),
            ValueType::U32 => Self::U32(parse_int(s, u32::from_str_radix)?),
            ValueType::F32 => Self::F32(parse_float(s)?),
            ValueType::I64 => Self::I64(parse_int(s, i64::from_str_radix)?),
            ValueType::U64 => Self::U64(parse_int(s, u64::from_str_radix)?),
            ValueType::F64 => Self::F64(parse_float(s)?),
        };
        Ok(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::Char16(v) => match v.to_char() {
                Some(c) => write!(f, "{c:?} (U+{:04X})", v.get()),
                None => write!(f, "U+{:04X}", v.get()),
            },
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v:?}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v:?}"),
        }
    }
}

fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

/// Parses bytes written in hex, e.g. `01 00`, `0x0100` or `de:ad:be:ef`.
///
/// Spaces, `_`, `:`, `,` and `-` between digits are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, GenericError> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    let mut nibbles = Vec::with_capacity(digits.len());
    for c in digits.chars() {
        if c.is_whitespace() || matches!(c, '_' | ':' | ',' | '-') {
            continue;
        }
        let nibble = hex_digit(c).with_whatever_context(|| format!("invalid hex digit `{c}` in `{s}`"))?;
        nibbles.push(nibble);
    }
    ensure_whatever!(
        nibbles.len() % 2 == 0,
        "odd number of hex digits in `{s}`"
    );
    Ok(nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Parses the hex bytes of a single value of type `ty`.
pub fn parse_value_bytes(ty: ValueType, s: &str) -> Result<ValueBytes, GenericError> {
    let bytes = parse_hex(s)?;
    let width = ty.width();
    ensure_whatever!(
        bytes.len() == width,
        "expected {width} bytes for {ty:?}, got {}",
        bytes.len()
    );
    let mut value = ValueBytes::new();
    value
        .try_extend_from_slice(&bytes)
        .whatever_context("value wider than 8 bytes")?;
    Ok(value)
}

/// Formats bytes as space-separated hex pairs.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
