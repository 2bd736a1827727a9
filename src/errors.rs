use crate::byte::{ReadError, WriteError};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum EncodeError {
    UnsupportedType(String),
    InvalidValue(String),
    MissingField(String),
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::UnsupportedType(name) => {
                write!(f, "Encoding error: Unsupported type - {}", name)
            }
            EncodeError::InvalidValue(msg) => write!(f, "Encoding error: Invalid value - {}", msg),
            EncodeError::MissingField(name) => {
                write!(f, "Encoding error: Missing field - {}", name)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<WriteError> for EncodeError {
    fn from(error: WriteError) -> Self {
        match error {
            WriteError::ValueTooLarge(msg) => EncodeError::InvalidValue(msg),
        }
    }
}

#[derive(Debug)]
pub enum DecodeError {
    UnsupportedType(String),
    NotEnoughBytes(String),
    Malformed(String),
    TrailingBytes(usize),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnsupportedType(name) => {
                write!(f, "Decoding error: Unsupported type - {}", name)
            }
            DecodeError::NotEnoughBytes(msg) => {
                write!(f, "Decoding error: Not enough bytes - {}", msg)
            }
            DecodeError::Malformed(msg) => write!(f, "Decoding error: Malformed - {}", msg),
            DecodeError::TrailingBytes(count) => {
                write!(f, "Decoding error: {} trailing bytes left unconsumed", count)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<ReadError> for DecodeError {
    fn from(error: ReadError) -> Self {
        match error {
            ReadError::NotEnoughBytes(msg) => DecodeError::NotEnoughBytes(msg),
        }
    }
}
