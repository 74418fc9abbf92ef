use argh::FromArgs;
use bitorder::EndianConverter;

use crate::{
    log::LogLevel,
    parse::{Order, ValueType},
};

/// Convert primitive values to and from bytes in an explicit byte order.
///
/// Value types: bool, i8, i16, u16, char16, i32, u32, f32, i64, u64, f64.
/// Put `--` before negative values, e.g. `bitorder encode i32 -- -5`.
#[derive(Debug, FromArgs)]
pub struct Args {
    /// print more diagnostics (repeatable)
    #[argh(switch, short = 'v')]
    pub verbose: u8,

    /// print errors only
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    #[argh(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.verbose, self.quiet)
    }
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
    Reverse(ReverseArgs),
    Native(NativeArgs),
}

/// Encode a value into bytes.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "encode")]
pub struct EncodeArgs {
    /// value type
    #[argh(positional)]
    pub ty: ValueType,

    /// value to encode
    #[argh(positional)]
    pub value: String,

    /// byte order of integers: little, big or native (default: big)
    #[argh(option, short = 'o', default = "Order::Big")]
    pub order: Order,

    /// byte order of floating-point numbers (default: same as --order)
    #[argh(option)]
    pub float_order: Option<Order>,

    /// character printed between the bytes of the bit string
    #[argh(option, short = 'd')]
    pub delimiter: Option<char>,
}

/// Decode bytes, given in hex, into a value.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "decode")]
pub struct DecodeArgs {
    /// value type
    #[argh(positional)]
    pub ty: ValueType,

    /// bytes in hex, e.g. "3f 80 00 00"
    #[argh(positional)]
    pub bytes: String,

    /// byte order of integers: little, big or native (default: big)
    #[argh(option, short = 'o', default = "Order::Big")]
    pub order: Order,

    /// byte order of floating-point numbers (default: same as --order)
    #[argh(option)]
    pub float_order: Option<Order>,
}

/// Reverse a range of bytes given in hex.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "reverse")]
pub struct ReverseArgs {
    /// bytes in hex
    #[argh(positional)]
    pub bytes: String,

    /// index of the first byte to reverse (default: 0)
    #[argh(option, default = "0")]
    pub offset: usize,

    /// number of bytes to reverse (default: up to the end)
    #[argh(option)]
    pub count: Option<usize>,
}

/// Print the byte order of this machine.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "native")]
pub struct NativeArgs {}

fn converter(order: Order, float_order: Option<Order>) -> EndianConverter {
    let integer_order = order.endianness();
    let float_order = float_order.map_or(integer_order, Order::endianness);
    EndianConverter::new(integer_order, float_order)
}

impl EncodeArgs {
    pub fn converter(&self) -> EndianConverter {
        converter(self.order, self.float_order)
    }
}

impl DecodeArgs {
    pub fn converter(&self) -> EndianConverter {
        converter(self.order, self.float_order)
    }
}
