use bitorder::{Char16, EndianConverter, Endianness, Primitive, bits, reverse};
use snafu::{OptionExt as _, ResultExt as _};

use crate::{
    args::{Command, DecodeArgs, EncodeArgs, NativeArgs, ReverseArgs},
    error::GenericError,
    parse::{self, MAX_WIDTH, Value, ValueBytes, ValueType},
};

pub fn run(command: &Command) -> Result<(), GenericError> {
    match command {
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
        Command::Reverse(args) => reverse(args),
        Command::Native(args) => native(args),
    }
}

fn write_value<T>(conv: &EndianConverter, value: T, buffer: &mut [u8]) -> Result<(), GenericError>
where
    T: Primitive,
{
    conv.write(value, buffer, 0)
        .whatever_context("failed to encode value")
}

/// Returns the bytes of `value` laid out by `conv`.
pub fn encode_value(conv: &EndianConverter, value: Value) -> Result<ValueBytes, GenericError> {
    let mut buffer = [0; MAX_WIDTH];
    let width = match value {
        Value::Bool(v) => {
            buffer[0] = conv.encode_bool(v);
            1
        }
        Value::I8(v) => {
            buffer[0] = conv.encode_i8(v);
            1
        }
        Value::I16(v) => write_value(conv, v, &mut buffer).map(|()| 2)?,
        Value::U16(v) => write_value(conv, v, &mut buffer).map(|()| 2)?,
        Value::Char16(v) => write_value(conv, v, &mut buffer).map(|()| 2)?,
        Value::I32(v) => write_value(conv, v, &mut buffer).map(|()| 4)?,
        Value::U32(v) => write_value(conv, v, &mut buffer).map(|()| 4)?,
        Value::F32(v) => write_value(conv, v, &mut buffer).map(|()| 4)?,
        Value::I64(v) => write_value(conv, v, &mut buffer).map(|()| 8)?,
        Value::U64(v) => write_value(conv, v, &mut buffer).map(|()| 8)?,
        Value::F64(v) => write_value(conv, v, &mut buffer).map(|()| 8)?,
    };
    Ok(buffer[..width].iter().copied().collect())
}

fn read_value<T>(conv: &EndianConverter, bytes: &[u8]) -> Result<T, GenericError>
where
    T: Primitive,
{
    conv.read(bytes, 0).whatever_context("failed to decode value")
}

/// Reads a value of type `ty` from `bytes` laid out by `conv`.
pub fn decode_value(
    conv: &EndianConverter,
    ty: ValueType,
    bytes: &[u8],
) -> Result<Value, GenericError> {
    let first = || {
        bytes
            .first()
            .copied()
            .whatever_context("no bytes to decode")
    };
    let value = match ty {
        ValueType::Bool => {
            let byte = first()?;
            if byte > 1 {
                warn!("non-canonical boolean byte {byte:#04x} read as true");
            }
            Value::Bool(conv.decode_bool(byte))
        }
        ValueType::I8 => Value::I8(conv.decode_i8(first()?)),
        ValueType::I16 => Value::I16(read_value(conv, bytes)?),
        ValueType::U16 => Value::U16(read_value(conv, bytes)?),
        ValueType::Char16 => Value::Char16(read_value::<Char16>(conv, bytes)?),
        ValueType::I32 => Value::I32(read_value(conv, bytes)?),
        ValueType::U32 => Value::U32(read_value(conv, bytes)?),
        ValueType::F32 => Value::F32(read_value(conv, bytes)?),
        ValueType::I64 => Value::I64(read_value(conv, bytes)?),
        ValueType::U64 => Value::U64(read_value(conv, bytes)?),
        ValueType::F64 => Value::F64(read_value(conv, bytes)?),
    };
    Ok(value)
}

fn log_converter(conv: &EndianConverter) {
    debug!(
        "integer order: {}, float order: {}, native order: {}",
        conv.integer_order(),
        conv.float_order(),
        conv.native_order()
    );
}

fn encode(args: &EncodeArgs) -> Result<(), GenericError> {
    let conv = args.converter();
    log_converter(&conv);

    let value = Value::parse(args.ty, &args.value)?;
    info!("encoding {value} as {:?}", args.ty);
    let bytes = encode_value(&conv, value)?;

    let mut bit_string = bits(&bytes);
    if let Some(delimiter) = args.delimiter {
        bit_string = bit_string.delimited(delimiter);
    }
    trace!("bit string has {} characters", bit_string.char_count());

    println!("hex:  {}", parse::format_hex(&bytes));
    println!("bits: {bit_string}");
    Ok(())
}

fn decode(args: &DecodeArgs) -> Result<(), GenericError> {
    let conv = args.converter();
    log_converter(&conv);

    let bytes = parse::parse_value_bytes(args.ty, &args.bytes)?;
    info!("decoding {} as {:?}", parse::format_hex(&bytes), args.ty);
    let value = decode_value(&conv, args.ty, &bytes)?;

    println!("{value}");
    Ok(())
}

fn reverse(args: &ReverseArgs) -> Result<(), GenericError> {
    let mut bytes = parse::parse_hex(&args.bytes)?;
    let count = match args.count {
        Some(count) => count,
        None => bytes
            .len()
            .checked_sub(args.offset)
            .with_whatever_context(|| {
                format!("offset {} is past the end of {} bytes", args.offset, bytes.len())
            })?,
    };
    debug!("reversing {count} bytes at offset {}", args.offset);

    reverse::reverse_range(&mut bytes, args.offset, count)
        .whatever_context("failed to reverse bytes")?;

    println!("{}", parse::format_hex(&bytes));
    Ok(())
}

fn native(_args: &NativeArgs) -> Result<(), GenericError> {
    let native = Endianness::NATIVE;
    trace!("native order as integer: {}", u8::from(native));
    println!("{native}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_literal_vectors() {
        let big = EndianConverter::BIG;
        let little = EndianConverter::LITTLE;
        assert_eq!(
            encode_value(&big, Value::U16(0x0100)).unwrap().as_slice(),
            &[0x01, 0x00]
        );
        assert_eq!(
            encode_value(&little, Value::U16(0x0100)).unwrap().as_slice(),
            &[0x00, 0x01]
        );
        assert_eq!(
            encode_value(&big, Value::F32(1.0)).unwrap().as_slice(),
            &[0x3F, 0x80, 0x00, 0x00]
        );
        assert_eq!(
            encode_value(&big, Value::I8(-1)).unwrap().as_slice(),
            &[0xFF]
        );
        assert_eq!(
            encode_value(&little, Value::Bool(true)).unwrap().as_slice(),
            &[0x01]
        );
    }

    #[test]
    fn test_encode_mixed_orders() {
        let conv = EndianConverter::new(Endianness::Big, Endianness::Little);
        assert_eq!(
            encode_value(&conv, Value::I32(1)).unwrap().as_slice(),
            &[0, 0, 0, 1]
        );
        assert_eq!(
            encode_value(&conv, Value::F64(1.0)).unwrap().as_slice(),
            &[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]
        );
    }

    #[test]
    fn test_decode_reverses_encode() {
        let conv = EndianConverter::new(Endianness::Little, Endianness::Big);
        for value in [
            Value::Bool(false),
            Value::I8(i8::MIN),
            Value::I16(-2),
            Value::U16(u16::MAX),
            Value::Char16(Char16::new(0x263A)),
            Value::I32(i32::MIN),
            Value::U32(0xDEAD_BEEF),
            Value::F32(-0.5),
            Value::I64(i64::MAX),
            Value::U64(1),
            Value::F64(core::f64::consts::PI),
        ] {
            let ty = match value {
                Value::Bool(_) => ValueType::Bool,
                Value::I8(_) => ValueType::I8,
                Value::I16(_) => ValueType::I16,
                Value::U16(_) => ValueType::U16,
                Value::Char16(_) => ValueType::Char16,
                Value::I32(_) => ValueType::I32,
                Value::U32(_) => ValueType::U32,
                Value::F32(_) => ValueType::F32,
                Value::I64(_) => ValueType::I64,
                Value::U64(_) => ValueType::U64,
                Value::F64(_) => ValueType::F64,
            };
            let bytes = encode_value(&conv, value).unwrap();
            assert_eq!(bytes.len(), ty.width());
            assert_eq!(decode_value(&conv, ty, &bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_short_input() {
        let conv = EndianConverter::BIG;
        assert!(decode_value(&conv, ValueType::U32, &[1, 2]).is_err());
        assert!(decode_value(&conv, ValueType::Bool, &[]).is_err());
    }

    #[test]
    fn test_decode_non_canonical_bool() {
        let conv = EndianConverter::BIG;
        assert_eq!(
            decode_value(&conv, ValueType::Bool, &[0x02]).unwrap(),
            Value::Bool(true)
        );
    }
}
