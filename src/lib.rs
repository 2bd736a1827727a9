// TODO: Add signed integer primitives to WireBackend
// TODO: Schema text format + parser so schemas can live in files

pub mod backends;
pub mod byte;
pub mod codec;
mod errors;
pub mod flat;
pub mod schema;
pub mod traits;
pub mod value;

pub use backends::WireBackend;
pub use byte::{ByteReader, ByteWriter};
pub use codec::Codec;
pub use errors::{DecodeError, EncodeError};
pub use flat::FlatCodec;
pub use schema::{flatten, Field, FlatEntry, FlatField, FlatSchema, Schema};
pub use traits::{Backend, BatchBackend};
pub use value::Value;
