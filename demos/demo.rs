use nestcodec::{Codec, Field, FlatCodec, FlatEntry, FlatSchema, Schema, Value, WireBackend};

fn main() {
    let schema = Schema::composite(vec![
        Field::new("header", Schema::composite(vec![
            Field::new("version", "uint8"),
            Field::new("chain_id", "uint32"),
        ])),
        Field::new("from", "address"),
        Field::new("to", "address"),
        Field::new("amount", "uint64"),
        Field::new("memo", "string"),
    ]);

    let value = Value::Map(vec![
        ("header".to_string(), Value::Map(vec![
            ("version".to_string(), Value::Uint(1)),
            ("chain_id".to_string(), Value::Uint(10)),
        ])),
        ("from".to_string(), Value::Address([0x11; 20])),
        ("to".to_string(), Value::Address([0x22; 20])),
        ("amount".to_string(), Value::Uint(2_500_000)),
        ("memo".to_string(), Value::Str("coffee".to_string())),
    ]);

    let codec = Codec::new(WireBackend);

    let bin = codec.encode(&schema, &value).unwrap();
    println!("encoded {} bytes: {}", bin.len(), hex::encode(&bin));

    let decoded = codec.decode(&schema, &bin).unwrap();
    dbg!(&decoded);
    assert_eq!(decoded, value);

    // Flat variant: same fields, no nesting, one backend round trip.
    let flat_schema = FlatSchema::fields(vec![
        FlatEntry::group(vec![
            FlatEntry::field("version", "uint8"),
            FlatEntry::field("chain_id", "uint32"),
        ]),
        FlatEntry::field("amount", "uint64"),
    ]);
    let flat_value = Value::Map(vec![
        ("version".to_string(), Value::Uint(1)),
        ("chain_id".to_string(), Value::Uint(10)),
        ("amount".to_string(), Value::Uint(2_500_000)),
    ]);

    let flat = FlatCodec::new(WireBackend);
    let flat_bin = flat.encode(&flat_schema, &flat_value).unwrap();
    println!("flat encoded {} bytes: {}", flat_bin.len(), hex::encode(&flat_bin));
    assert_eq!(flat.decode(&flat_schema, &flat_bin).unwrap(), flat_value);
}
