use pqschema_core::{
    ConvertedType, FieldPath, LogicalType, PhysicalType, Repetition, SchemaError, SchemaNode,
};
use pqschema_gostruct::{
    RenderOptions, compact_go, indent_go, render, render_declaration, render_with_options,
};

fn utf8(name: &str, repetition: Repetition) -> SchemaNode {
    SchemaNode::primitive(name, PhysicalType::ByteArray, repetition)
        .with_converted_type(ConvertedType::Utf8)
        .with_logical_type(LogicalType::String)
}

fn int32(name: &str, repetition: Repetition) -> SchemaNode {
    SchemaNode::primitive(name, PhysicalType::Int32, repetition)
}

fn root(children: impl IntoIterator<Item = SchemaNode>) -> SchemaNode {
    SchemaNode::root("Parquet_go_root", children)
}

/// `Scores` map with a string key and a map value, as written by a map-of-maps file.
fn map_value_map() -> SchemaNode {
    root([
        utf8("Name", Repetition::Required),
        SchemaNode::map(
            "Scores",
            Repetition::Optional,
            utf8("Key", Repetition::Required),
            SchemaNode::map(
                "Value",
                Repetition::Optional,
                utf8("Key", Repetition::Required),
                int32("Value", Repetition::Optional),
            ),
        ),
    ])
}

#[test]
fn required_int_and_optional_string() {
    let tree = root([
        int32("A", Repetition::Required),
        utf8("B", Repetition::Optional),
    ]);
    let text = render(&tree).unwrap();
    assert_eq!(
        text,
        "struct {\n\
         A int32 `parquet:\"name=A, type=INT32, repetitiontype=REQUIRED\"`\n\
         B *string `parquet:\"name=B, type=BYTE_ARRAY, convertedtype=UTF8, repetitiontype=OPTIONAL\"`\n\
         }"
    );
}

#[test]
fn declaration_is_prefixed_with_sanitized_root_name() {
    let tree = SchemaNode::root("schema", [int32("a", Repetition::Required)]);
    let text = render_declaration(&tree).unwrap();
    assert!(text.starts_with("type Schema struct {\n"));
}

#[test]
fn composite_map_value_is_rejected() {
    let err = render(&map_value_map()).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnsupportedCompositeMapValue {
            path: FieldPath::new("Parquet_go_root").child("Scores"),
        }
    );
    assert!(
        err.to_string()
            .contains("go struct does not support composite type as map value")
    );
}

#[test]
fn composite_map_key_is_rejected_before_value() {
    // 2nd field is "Scores", whose 1st child is "key_value", whose 1st child is the key.
    let tree = map_value_map()
        .patched(&[1, 0, 0], |key| {
            key.set_converted_type(Some(ConvertedType::Map))
        })
        .unwrap();
    let err = render(&tree).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::UnsupportedCompositeMapKey { .. }
    ));
    assert!(
        err.to_string()
            .contains("go struct does not support composite type as map key")
    );
}

#[test]
fn struct_map_key_is_rejected() {
    let tree = root([SchemaNode::map(
        "m",
        Repetition::Required,
        SchemaNode::group(
            "key",
            Repetition::Required,
            [int32("x", Repetition::Required)],
        ),
        int32("value", Repetition::Required),
    )]);
    assert!(matches!(
        render(&tree),
        Err(SchemaError::UnsupportedCompositeMapKey { .. })
    ));
}

#[test]
fn list_map_key_is_rejected() {
    let tree = root([SchemaNode::map(
        "m",
        Repetition::Optional,
        SchemaNode::list(
            "key",
            Repetition::Required,
            utf8("element", Repetition::Required),
        ),
        int32("value", Repetition::Required),
    )]);
    assert_eq!(
        render(&tree),
        Err(SchemaError::UnsupportedCompositeMapKey {
            path: FieldPath::new("Parquet_go_root").child("M"),
        })
    );
}

#[test]
fn list_map_value_is_rejected() {
    let tree = root([SchemaNode::map(
        "m",
        Repetition::Optional,
        utf8("key", Repetition::Required),
        SchemaNode::list(
            "value",
            Repetition::Optional,
            int32("element", Repetition::Optional),
        ),
    )]);
    assert_eq!(
        render(&tree),
        Err(SchemaError::UnsupportedCompositeMapValue {
            path: FieldPath::new("Parquet_go_root").child("M"),
        })
    );
}

#[test]
fn map_list_element_is_rejected() {
    let element = SchemaNode::map(
        "element",
        Repetition::Optional,
        utf8("key", Repetition::Required),
        int32("value", Repetition::Optional),
    );
    let tree = root([SchemaNode::list("Lom", Repetition::Optional, element)]);
    assert_eq!(
        render(&tree),
        Err(SchemaError::UnsupportedCompositeListElement {
            path: FieldPath::new("Parquet_go_root").child("Lom"),
        })
    );
}

#[test]
fn list_of_lists_names_the_list_field() {
    let element = SchemaNode::list(
        "element",
        Repetition::Optional,
        int32("element", Repetition::Optional),
    );
    let tree = root([SchemaNode::list("Lol", Repetition::Optional, element)]);
    let err = render(&tree).unwrap_err();
    assert!(err.to_string().contains(
        "go struct does not support composite type as list element in field [Parquet_go_root.Lol]"
    ));
}

#[test]
fn list_of_structs_is_rejected() {
    let tree = root([SchemaNode::list(
        "points",
        Repetition::Required,
        SchemaNode::group(
            "element",
            Repetition::Required,
            [
                int32("x", Repetition::Required),
                int32("y", Repetition::Required),
            ],
        ),
    )]);
    assert!(matches!(
        render(&tree),
        Err(SchemaError::UnsupportedCompositeListElement { .. })
    ));
}

#[test]
fn missing_type_is_reported_at_any_depth() {
    let tree = root([
        utf8("Shoe_brand", Repetition::Required),
        SchemaNode::group(
            "outer",
            Repetition::Optional,
            [SchemaNode::group(
                "inner",
                Repetition::Required,
                [int32("leaf", Repetition::Required)],
            )],
        ),
    ]);

    let top = tree.patched(&[0], |n| n.set_physical_code(None)).unwrap();
    let err = render(&top).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type not set in field [Parquet_go_root.Shoe_brand]"
    );

    let deep = tree
        .patched(&[1, 0, 0], |n| n.set_physical_code(None))
        .unwrap();
    let err = render(&deep).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type not set in field [Parquet_go_root.Outer.Inner.Leaf]"
    );
}

#[test]
fn unknown_type_in_list_element_is_reported() {
    let tree = root([SchemaNode::list(
        "V1",
        Repetition::Optional,
        int32("Element", Repetition::Required),
    )]);
    // 1st field is "V1", whose 1st child is "list", whose 1st child is "Element".
    let broken = tree
        .patched(&[0, 0, 0], |n| n.set_physical_code(Some(999)))
        .unwrap();
    let err = render(&broken).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::UnknownPhysicalType { code: 999, .. }
    ));
    assert!(err.to_string().contains("unknown type: 999"));
}

#[test]
fn unknown_type_in_map_key_and_missing_type_in_map_value() {
    let tree = root([
        int32("V0", Repetition::Required),
        SchemaNode::map(
            "V1",
            Repetition::Optional,
            utf8("Key", Repetition::Required),
            int32("Value", Repetition::Optional),
        ),
    ]);

    let bad_key = tree
        .patched(&[1, 0, 0], |n| n.set_physical_code(Some(999)))
        .unwrap();
    let err = render(&bad_key).unwrap_err();
    assert!(err.to_string().contains("unknown type: 999"));

    let bad_value = tree
        .patched(&[1, 0, 1], |n| n.set_physical_code(None))
        .unwrap();
    let err = render(&bad_value).unwrap_err();
    assert!(err.to_string().contains("type not set"));

    // The original tree is untouched by either patch.
    assert!(render(&tree).is_ok());
}

#[test]
fn optional_applies_to_every_shape() {
    let tree = root([
        SchemaNode::group(
            "s",
            Repetition::Optional,
            [int32("x", Repetition::Required)],
        ),
        SchemaNode::list(
            "l",
            Repetition::Optional,
            int32("element", Repetition::Required),
        ),
        SchemaNode::map(
            "m",
            Repetition::Optional,
            utf8("key", Repetition::Required),
            int32("value", Repetition::Required),
        ),
    ]);
    let text = render(&tree).unwrap();
    assert!(text.contains("\nS *struct {\n"));
    assert!(text.contains("\nL *[]int32 "));
    assert!(text.contains("\nM *map[string]int32 "));
}

#[test]
fn bare_repeated_group_is_a_slice_of_structs() {
    let tree = root([SchemaNode::group(
        "entries",
        Repetition::Repeated,
        [int32("id", Repetition::Required)],
    )]);
    let text = render(&tree).unwrap();
    assert_eq!(
        text,
        "struct {\n\
         Entries []struct {\n\
         Id int32 `parquet:\"name=id, type=INT32, repetitiontype=REQUIRED\"`\n\
         } `parquet:\"name=entries, repetitiontype=REPEATED\"`\n\
         }"
    );
}

#[test]
fn scalar_annotations_pick_go_types() {
    let tree = root([
        SchemaNode::primitive("flag", PhysicalType::Boolean, Repetition::Required),
        int32("tiny", Repetition::Required).with_converted_type(ConvertedType::Int8),
        int32("small", Repetition::Required).with_logical_type(LogicalType::Integer {
            bit_width: 16,
            signed: false,
        }),
        SchemaNode::primitive("big", PhysicalType::Int64, Repetition::Required)
            .with_converted_type(ConvertedType::Uint64),
        int32("day", Repetition::Required).with_converted_type(ConvertedType::Date),
        SchemaNode::primitive("legacy_ts", PhysicalType::Int96, Repetition::Required),
        SchemaNode::primitive("ratio", PhysicalType::Float, Repetition::Required),
        SchemaNode::primitive("mean", PhysicalType::Double, Repetition::Required),
        SchemaNode::primitive("kind", PhysicalType::ByteArray, Repetition::Required)
            .with_logical_type(LogicalType::Enum),
        SchemaNode::primitive("id", PhysicalType::FixedLenByteArray, Repetition::Required)
            .with_type_length(16)
            .with_logical_type(LogicalType::Uuid),
    ]);
    let text = render(&tree).unwrap();
    let types: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split(' ').nth(1))
        .collect();
    assert_eq!(
        types,
        [
            "{", "bool", "int8", "uint16", "uint64", "int32", "string", "float32", "float64",
            "string", "[]byte"
        ]
    );
    let uuid_tag = "name=id, type=FIXED_LEN_BYTE_ARRAY, length=16, repetitiontype=REQUIRED";
    assert!(text.contains(uuid_tag));
}

#[test]
fn binary_map_keys_render_as_string() {
    let tree = root([SchemaNode::map(
        "blobs",
        Repetition::Required,
        SchemaNode::primitive("key", PhysicalType::ByteArray, Repetition::Required),
        SchemaNode::primitive("value", PhysicalType::ByteArray, Repetition::Required),
    )]);
    let text = render(&tree).unwrap();
    assert!(text.contains("\nBlobs map[string][]byte "));
}

#[test]
fn nesting_beyond_max_depth_fails_closed() {
    let mut node = int32("leaf", Repetition::Required);
    for i in 0..10 {
        node = SchemaNode::group(format!("g{i}"), Repetition::Required, [node]);
    }
    let tree = root([node]);

    let options = RenderOptions { max_depth: 5 };
    assert!(matches!(
        render_with_options(&tree, &options),
        Err(SchemaError::DepthExceeded { max_depth: 5, .. })
    ));
    assert!(render(&tree).is_ok());
}

#[test]
fn raw_names_are_escaped_inside_tags() {
    let tree = root([
        int32("a\n}", Repetition::Required),
        int32("x`y", Repetition::Required),
        utf8("say \"hi\"", Repetition::Optional),
    ]);
    let text = render_declaration(&tree).unwrap();
    assert_eq!(
        text,
        "type Parquet_go_root struct {\n\
         A10125 int32 `parquet:\"name=a%0A}, type=INT32, repetitiontype=REQUIRED\"`\n\
         X96y int32 `parquet:\"name=x%60y, type=INT32, repetitiontype=REQUIRED\"`\n\
         Say3234hi34 *string `parquet:\"name=say %22hi%22, type=BYTE_ARRAY, convertedtype=UTF8, repetitiontype=OPTIONAL\"`\n\
         }"
    );

    let pretty = indent_go(&text);
    assert_eq!(pretty.lines().count(), 5);
    let fields: Vec<&str> = pretty.lines().skip(1).take(3).collect();
    assert!(fields.iter().all(|line| line.starts_with('\t')));
    assert!(pretty.ends_with("\n}"));
    assert_eq!(compact_go(&pretty), text);
}
