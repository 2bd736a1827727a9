use crate::errors::{DecodeError, EncodeError};
use crate::schema::{flatten, FlatSchema};
use crate::traits::BatchBackend;
use crate::value::{insert_entry, Value};

/// Wrapper for batch codec backends. Instead of one backend call per field,
/// the whole schema is flattened into parallel type/value sequences and
/// handed to the backend in a single round trip. The backend owns byte
/// accounting for the batch, so no offsets are tracked here; the trade-off
/// is that fields cannot themselves be composite.
pub struct FlatCodec<B> {
    backend: B,
}

impl<B: BatchBackend> FlatCodec<B> {
    pub fn new(backend: B) -> Self {
        FlatCodec { backend }
    }

    pub fn encode(&self, schema: &FlatSchema, value: &Value) -> Result<Vec<u8>, EncodeError> {
        match schema {
            FlatSchema::Primitive(ty) => self.backend.encode_many(&[ty.as_str()], &[value]),
            FlatSchema::Fields(entries) => {
                let fields = flatten(entries);
                let mut tys = Vec::with_capacity(fields.len());
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    tys.push(field.ty.as_str());
                    values.push(
                        value
                            .get(&field.name)
                            .ok_or_else(|| EncodeError::MissingField(field.name.clone()))?,
                    );
                }
                self.backend.encode_many(&tys, &values)
            }
        }
    }

    pub fn decode(&self, schema: &FlatSchema, bytes: &[u8]) -> Result<Value, DecodeError> {
        match schema {
            FlatSchema::Primitive(ty) => {
                let values = self.backend.decode_many(&[ty.as_str()], bytes)?;
                values.into_iter().next().ok_or_else(|| {
                    DecodeError::Malformed("batch backend returned no values".to_string())
                })
            }
            FlatSchema::Fields(entries) => {
                let fields = flatten(entries);
                let tys: Vec<&str> = fields.iter().map(|field| field.ty.as_str()).collect();
                let values = self.backend.decode_many(&tys, bytes)?;
                if values.len() != fields.len() {
                    return Err(DecodeError::Malformed(format!(
                        "batch backend returned {} values for {} types",
                        values.len(),
                        fields.len()
                    )));
                }

                let mut decoded = Vec::with_capacity(fields.len());
                for (field, item) in fields.iter().zip(values) {
                    insert_entry(&mut decoded, &field.name, item);
                }
                Ok(Value::Map(decoded))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::WireBackend;
    use crate::schema::FlatEntry;

    fn codec() -> FlatCodec<WireBackend> {
        FlatCodec::new(WireBackend)
    }

    #[test]
    fn output_matches_a_direct_batch_call() {
        let codec = codec();
        let schema = FlatSchema::fields(vec![
            FlatEntry::field("a", "uint8"),
            FlatEntry::field("b", "uint8"),
        ]);
        let value = Value::Map(vec![
            ("a".to_string(), Value::Uint(1)),
            ("b".to_string(), Value::Uint(2)),
        ]);

        let via_codec = codec.encode(&schema, &value).unwrap();
        let direct = WireBackend
            .encode_many(&["uint8", "uint8"], &[&Value::Uint(1), &Value::Uint(2)])
            .unwrap();
        assert_eq!(via_codec, direct);
    }

    #[test]
    fn primitive_schema_wraps_a_single_element_batch() {
        let codec = codec();
        let schema = FlatSchema::primitive("uint32");
        let encoded = codec.encode(&schema, &Value::Uint(0xcafe)).unwrap();
        assert_eq!(codec.decode(&schema, &encoded).unwrap(), Value::Uint(0xcafe));
    }

    #[test]
    fn grouped_entries_flatten_in_order() {
        let codec = codec();
        let grouped = FlatSchema::fields(vec![
            FlatEntry::field("a", "uint8"),
            FlatEntry::group(vec![
                FlatEntry::field("b", "string"),
                FlatEntry::field("c", "uint16"),
            ]),
        ]);
        let plain = FlatSchema::fields(vec![
            FlatEntry::field("a", "uint8"),
            FlatEntry::field("b", "string"),
            FlatEntry::field("c", "uint16"),
        ]);
        let value = Value::Map(vec![
            ("a".to_string(), Value::Uint(1)),
            ("b".to_string(), Value::Str("mid".to_string())),
            ("c".to_string(), Value::Uint(515)),
        ]);

        let encoded = codec.encode(&grouped, &value).unwrap();
        assert_eq!(encoded, codec.encode(&plain, &value).unwrap());
        assert_eq!(codec.decode(&grouped, &encoded).unwrap(), value);
    }

    #[test]
    fn missing_field_aborts_the_batch() {
        let codec = codec();
        let schema = FlatSchema::fields(vec![
            FlatEntry::field("a", "uint8"),
            FlatEntry::field("b", "uint8"),
        ]);
        let value = Value::Map(vec![("a".to_string(), Value::Uint(1))]);
        let err = codec.encode(&schema, &value).unwrap_err();
        assert!(matches!(err, EncodeError::MissingField(name) if name == "b"));
    }

    #[test]
    fn duplicate_names_last_write_wins_on_decode() {
        let codec = codec();
        let schema = FlatSchema::fields(vec![
            FlatEntry::field("a", "uint8"),
            FlatEntry::field("a", "uint8"),
        ]);
        let decoded = codec.decode(&schema, &[1, 2]).unwrap();
        assert_eq!(decoded, Value::Map(vec![("a".to_string(), Value::Uint(2))]));
    }

    #[test]
    fn unsupported_type_propagates() {
        let codec = codec();
        let schema = FlatSchema::fields(vec![FlatEntry::field("a", "float128")]);
        let value = Value::Map(vec![("a".to_string(), Value::Uint(1))]);
        let err = codec.encode(&schema, &value).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedType(name) if name == "float128"));
    }
}
