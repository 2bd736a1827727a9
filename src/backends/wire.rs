use crate::byte::{ByteReader, ByteWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::{Backend, BatchBackend};
use crate::value::Value;

const ADDRESS_WIDTH: usize = 20;
const LENGTH_PREFIX_WIDTH: usize = 4;

/// Plain wire-format backend: big-endian fixed-width integers, raw 20-byte
/// addresses, and length-prefixed `bytes`/`string`. The two length-prefixed
/// types are variable-width, which is what makes the tree codec's consumed
/// tracking observable.
///
/// Batch framing is the ordered concatenation of the per-type encodings.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireBackend;

fn uint_width(ty: &str) -> Option<usize> {
    match ty {
        "uint8" => Some(1),
        "uint16" => Some(2),
        "uint32" => Some(4),
        "uint64" => Some(8),
        _ => None,
    }
}

fn mismatch(ty: &str, value: &Value) -> EncodeError {
    EncodeError::InvalidValue(format!("type {} cannot encode a {} value", ty, value.kind()))
}

impl Backend for WireBackend {
    fn encode(&self, ty: &str, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let mut writer = ByteWriter::new();

        if let Some(width) = uint_width(ty) {
            match value {
                Value::Uint(v) => writer.put_uint(*v, width)?,
                _ => return Err(mismatch(ty, value)),
            }
            return Ok(writer.into_bytes());
        }

        match ty {
            "bool" => match value {
                Value::Bool(b) => writer.put_u8(*b as u8),
                _ => return Err(mismatch(ty, value)),
            },
            "address" => match value {
                Value::Address(addr) => writer.put_bytes(addr),
                _ => return Err(mismatch(ty, value)),
            },
            "bytes" => match value {
                Value::Bytes(payload) => {
                    writer.put_uint(payload.len() as u64, LENGTH_PREFIX_WIDTH)?;
                    writer.put_bytes(payload);
                }
                _ => return Err(mismatch(ty, value)),
            },
            "string" => match value {
                Value::Str(payload) => {
                    writer.put_uint(payload.len() as u64, LENGTH_PREFIX_WIDTH)?;
                    writer.put_bytes(payload.as_bytes());
                }
                _ => return Err(mismatch(ty, value)),
            },
            _ => return Err(EncodeError::UnsupportedType(ty.to_string())),
        }

        Ok(writer.into_bytes())
    }

    fn decode(&self, ty: &str, bytes: &[u8]) -> Result<(Value, usize), DecodeError> {
        let mut reader = ByteReader::new(bytes);

        if let Some(width) = uint_width(ty) {
            let value = reader.take_uint(width)?;
            return Ok((Value::Uint(value), reader.consumed()));
        }

        let value = match ty {
            "bool" => match reader.take_u8()? {
                0 => Value::Bool(false),
                1 => Value::Bool(true),
                other => {
                    return Err(DecodeError::Malformed(format!(
                        "invalid boolean byte 0x{:02x}",
                        other
                    )))
                }
            },
            "address" => {
                let mut addr = [0u8; ADDRESS_WIDTH];
                addr.copy_from_slice(reader.take(ADDRESS_WIDTH)?);
                Value::Address(addr)
            }
            "bytes" => {
                let length = reader.take_uint(LENGTH_PREFIX_WIDTH)? as usize;
                Value::Bytes(reader.take(length)?.to_vec())
            }
            "string" => {
                let length = reader.take_uint(LENGTH_PREFIX_WIDTH)? as usize;
                let payload = reader.take(length)?;
                match std::str::from_utf8(payload) {
                    Ok(text) => Value::Str(text.to_string()),
                    Err(err) => {
                        return Err(DecodeError::Malformed(format!(
                            "string payload is not valid UTF-8: {}",
                            err
                        )))
                    }
                }
            }
            _ => return Err(DecodeError::UnsupportedType(ty.to_string())),
        };

        Ok((value, reader.consumed()))
    }
}

impl BatchBackend for WireBackend {
    fn encode_many(&self, tys: &[&str], values: &[&Value]) -> Result<Vec<u8>, EncodeError> {
        if tys.len() != values.len() {
            return Err(EncodeError::InvalidValue(format!(
                "{} types but {} values in batch",
                tys.len(),
                values.len()
            )));
        }

        let mut encoded = Vec::new();
        for (ty, value) in tys.iter().zip(values) {
            encoded.extend_from_slice(&Backend::encode(self, ty, value)?);
        }
        Ok(encoded)
    }

    fn decode_many(&self, tys: &[&str], bytes: &[u8]) -> Result<Vec<Value>, DecodeError> {
        let mut offset = 0;
        let mut values = Vec::with_capacity(tys.len());
        for ty in tys {
            let rest = bytes.get(offset..).unwrap_or(&[]);
            let (value, consumed) = Backend::decode(self, ty, rest)?;
            values.push(value);
            offset += consumed;
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_uints_are_big_endian() {
        let encoded = WireBackend.encode("uint32", &Value::Uint(0x01020304)).unwrap();
        assert_eq!(encoded, vec![1, 2, 3, 4]);

        let (value, consumed) = WireBackend.decode("uint32", &[1, 2, 3, 4, 0xff]).unwrap();
        assert_eq!(value, Value::Uint(0x01020304));
        assert_eq!(consumed, 4);
    }

    #[test]
    fn narrow_uint_rejects_oversized_value() {
        let err = WireBackend.encode("uint8", &Value::Uint(300)).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidValue(_)));
    }

    #[test]
    fn string_is_length_prefixed() {
        let encoded = WireBackend
            .encode("string", &Value::Str("ok".to_string()))
            .unwrap();
        assert_eq!(encoded, vec![0, 0, 0, 2, b'o', b'k']);

        let (value, consumed) = WireBackend.decode("string", &encoded).unwrap();
        assert_eq!(value, Value::Str("ok".to_string()));
        assert_eq!(consumed, 6);
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let err = WireBackend
            .decode("string", &[0, 0, 0, 2, 0xff, 0xfe])
            .unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn bool_rejects_non_boolean_byte() {
        let err = WireBackend.decode("bool", &[2]).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn address_round_trips() {
        let addr = [0xabu8; 20];
        let encoded = WireBackend.encode("address", &Value::Address(addr)).unwrap();
        assert_eq!(encoded.len(), 20);
        let (value, consumed) = WireBackend.decode("address", &encoded).unwrap();
        assert_eq!(value, Value::Address(addr));
        assert_eq!(consumed, 20);
    }

    #[test]
    fn unknown_type_is_unsupported_both_ways() {
        let err = WireBackend.encode("int8", &Value::Uint(1)).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedType(name) if name == "int8"));

        let err = WireBackend.decode("int8", &[0]).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedType(name) if name == "int8"));
    }

    #[test]
    fn type_value_mismatch_is_invalid_value() {
        let err = WireBackend.encode("uint8", &Value::Bool(true)).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidValue(_)));
    }

    #[test]
    fn batch_is_ordered_concatenation() {
        let direct = WireBackend
            .encode_many(
                &["uint8", "string", "uint16"],
                &[
                    &Value::Uint(9),
                    &Value::Str("ab".to_string()),
                    &Value::Uint(0x0102),
                ],
            )
            .unwrap();

        let mut expected = WireBackend.encode("uint8", &Value::Uint(9)).unwrap();
        expected.extend(WireBackend.encode("string", &Value::Str("ab".to_string())).unwrap());
        expected.extend(WireBackend.encode("uint16", &Value::Uint(0x0102)).unwrap());
        assert_eq!(direct, expected);

        let values = WireBackend
            .decode_many(&["uint8", "string", "uint16"], &direct)
            .unwrap();
        assert_eq!(
            values,
            vec![
                Value::Uint(9),
                Value::Str("ab".to_string()),
                Value::Uint(0x0102),
            ]
        );
    }

    #[test]
    fn batch_length_mismatch_is_rejected() {
        let err = WireBackend
            .encode_many(&["uint8"], &[&Value::Uint(1), &Value::Uint(2)])
            .unwrap_err();
        assert!(matches!(err, EncodeError::InvalidValue(_)));
    }
}
