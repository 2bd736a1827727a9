/// A decoded value. The traversal layer never inspects the scalar variants;
/// they only have meaning at the backend boundary. `Map` is what composite
/// schemas decode into: entries keep field declaration order, lookup is by
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uint(u64),
    Bool(bool),
    Address([u8; 20]),
    Bytes(Vec<u8>),
    Str(String),
    Map(Vec<(String, Value)>),
}

impl Value {
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Uint(_) => "uint",
            Value::Bool(_) => "bool",
            Value::Address(_) => "address",
            Value::Bytes(_) => "bytes",
            Value::Str(_) => "string",
            Value::Map(_) => "map",
        }
    }
}

/// Inserts into an ordered entry list; an existing key is overwritten in
/// place. Duplicate field names in a schema are a caller error, and this is
/// where "last write wins" comes from.
pub(crate) fn insert_entry(entries: &mut Vec<(String, Value)>, name: &str, value: Value) {
    match entries.iter_mut().find(|(key, _)| key == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name.to_string(), value)),
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<[u8; 20]> for Value {
    fn from(value: [u8; 20]) -> Self {
        Value::Address(value)
    }
}
