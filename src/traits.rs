use crate::errors::{DecodeError, EncodeError};
use crate::value::Value;

/// Primitive codec backend for the tree codec: one call per leaf.
///
/// `decode` reads one value of type `ty` from the front of `bytes` and
/// reports how many bytes it consumed. It must determine that count from the
/// prefix it reads, without looking past it; the slice it is handed usually
/// extends well beyond the value because sibling widths are unknown to the
/// caller.
pub trait Backend {
    fn encode(&self, ty: &str, value: &Value) -> Result<Vec<u8>, EncodeError>;
    fn decode(&self, ty: &str, bytes: &[u8]) -> Result<(Value, usize), DecodeError>;
}

/// Batch codec backend for the flat codec: one call per encode/decode, with
/// parallel positionally-matched type and value sequences. The backend owns
/// framing and ordering of the whole batch; the caller never sees per-field
/// offsets.
pub trait BatchBackend {
    fn encode_many(&self, tys: &[&str], values: &[&Value]) -> Result<Vec<u8>, EncodeError>;
    fn decode_many(&self, tys: &[&str], bytes: &[u8]) -> Result<Vec<Value>, DecodeError>;
}
