use crate::errors::{DecodeError, EncodeError};
use crate::schema::Schema;
use crate::traits::Backend;
use crate::value::{insert_entry, Value};

/// Wrapper for codec backends. Walks a nested schema so that the backend
/// only ever sees one primitive type at a time.
///
/// Holds no state besides the bound backend; a single instance can serve any
/// number of encode/decode calls.
pub struct Codec<B> {
    backend: B,
}

impl<B: Backend> Codec<B> {
    pub fn new(backend: B) -> Self {
        Codec { backend }
    }

    /// Encodes `value` under `schema`. Composite fields are encoded in
    /// declaration order and concatenated as-is; this layer adds no framing
    /// of its own.
    pub fn encode(&self, schema: &Schema, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match schema {
            Schema::Primitive(ty) => self.backend.encode(ty, value),
            Schema::Composite(fields) => {
                let mut encoded = Vec::new();
                for field in fields {
                    let item = value
                        .get(&field.name)
                        .ok_or_else(|| EncodeError::MissingField(field.name.clone()))?;
                    encoded.extend_from_slice(&self.encode(&field.ty, item)?);
                }
                Ok(encoded)
            }
        }
    }

    /// Decodes one value of `schema` from the front of `bytes`. Trailing
    /// bytes beyond the schema are ignored; use [`Codec::decode_exact`] to
    /// reject them.
    pub fn decode(&self, schema: &Schema, bytes: &[u8]) -> Result<Value, DecodeError> {
        Ok(self.decode_consumed(schema, bytes)?.0)
    }

    /// Like [`Codec::decode`], but fails unless the schema consumes the
    /// buffer exactly.
    pub fn decode_exact(&self, schema: &Schema, bytes: &[u8]) -> Result<Value, DecodeError> {
        let (value, consumed) = self.decode_consumed(schema, bytes)?;
        if consumed != bytes.len() {
            return Err(DecodeError::TrailingBytes(bytes.len() - consumed));
        }
        Ok(value)
    }

    /// Recursive worker. The consumed count returned alongside each value is
    /// what lets a composite locate the field after a variable-width one,
    /// and what lets a nested composite act as a field of its parent. Fields
    /// are always handed the whole remaining buffer; widths are only known
    /// after the backend has decoded the prefix.
    fn decode_consumed(&self, schema: &Schema, bytes: &[u8]) -> Result<(Value, usize), DecodeError> {
        match schema {
            Schema::Primitive(ty) => self.backend.decode(ty, bytes),
            Schema::Composite(fields) => {
                let mut offset = 0;
                let mut entries = Vec::with_capacity(fields.len());
                for field in fields {
                    let rest = bytes.get(offset..).unwrap_or(&[]);
                    let (item, consumed) = self.decode_consumed(&field.ty, rest)?;
                    insert_entry(&mut entries, &field.name, item);
                    offset += consumed;
                }
                Ok((Value::Map(entries), offset))
            }
        }
    }
}
