/// Schema for the tree codec: a bare primitive type name, or an ordered list
/// of named fields whose types may themselves be composite. Field order is
/// significant; it is the encoding concatenation order and the decoding
/// offset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    Primitive(String),
    Composite(Vec<Field>),
}

impl Schema {
    pub fn primitive(name: impl Into<String>) -> Self {
        Schema::Primitive(name.into())
    }

    pub fn composite(fields: Vec<Field>) -> Self {
        Schema::Composite(fields)
    }
}

impl From<&str> for Schema {
    fn from(name: &str) -> Self {
        Schema::Primitive(name.to_string())
    }
}

/// A named field. Names must be unique within one composite; this is a
/// caller contract, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Schema,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Schema>) -> Self {
        Field {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Schema for the flat codec. Field types are always primitive type names,
/// but entries may be grouped into nested lists; grouping is structural only
/// and disappears when the schema is flattened for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatSchema {
    Primitive(String),
    Fields(Vec<FlatEntry>),
}

impl FlatSchema {
    pub fn primitive(name: impl Into<String>) -> Self {
        FlatSchema::Primitive(name.into())
    }

    pub fn fields(entries: Vec<FlatEntry>) -> Self {
        FlatSchema::Fields(entries)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatEntry {
    Field(FlatField),
    Group(Vec<FlatEntry>),
}

impl FlatEntry {
    pub fn field(name: impl Into<String>, ty: impl Into<String>) -> Self {
        FlatEntry::Field(FlatField {
            name: name.into(),
            ty: ty.into(),
        })
    }

    pub fn group(entries: Vec<FlatEntry>) -> Self {
        FlatEntry::Group(entries)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatField {
    pub name: String,
    pub ty: String,
}

/// Collects fields depth-first, in declaration order, erasing groups.
pub fn flatten(entries: &[FlatEntry]) -> Vec<&FlatField> {
    let mut fields = Vec::new();
    collect(entries, &mut fields);
    fields
}

fn collect<'a>(entries: &'a [FlatEntry], fields: &mut Vec<&'a FlatField>) {
    for entry in entries {
        match entry {
            FlatEntry::Field(field) => fields.push(field),
            FlatEntry::Group(inner) => collect(inner, fields),
        }
    }
}
