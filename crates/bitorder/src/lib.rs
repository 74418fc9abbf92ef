//! Endianness-aware conversion between primitive values and their bytes.
//!
//! This crate converts fixed-width primitives (booleans, integers,
//! floating-point numbers and 16-bit characters) to and from their raw bytes
//! with an explicit byte order, independent of the byte order of the machine.
//! Useful for network protocols, file formats and hardware interfaces.
//!
//! - [`Binary16`], [`Binary32`] and [`Binary64`] hold exactly 2, 4 or 8 bytes.
//! - [`codec`] copies the in-memory bytes of a value without reordering.
//! - [`reverse`] reverses byte runs, buffers and values.
//! - [`EndianConverter`] combines the above into a byte order policy.
//!
//! # Examples
//!
//! ```
//! use bitorder::EndianConverter;
//!
//! let bin = EndianConverter::BIG.encode(1.0_f32);
//! assert_eq!(bin.to_bytes(), [0x3F, 0x80, 0x00, 0x00]);
//! assert_eq!(EndianConverter::BIG.decode::<f32>(bin), 1.0);
//! ```

#![cfg_attr(
    feature = "unstable-provider-api",
    feature(error_generic_member_access)
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod binary;
pub mod codec;
mod converter;
mod endianness;
mod error;
mod primitive;
pub mod reverse;

pub use self::{
    binary::{Binary, Binary16, Binary32, Binary64, BitString, bits},
    converter::EndianConverter,
    endianness::Endianness,
    error::{ConvertError, ConvertErrorKind},
    primitive::{Char16, Primitive, ValueClass},
};
