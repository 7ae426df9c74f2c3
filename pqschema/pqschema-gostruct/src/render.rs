use std::fmt::Write as _;

use pqschema_core::{
    ConvertedType, FieldPath, LogicalType, NodeKind, PhysicalType, Repetition, SchemaError,
    SchemaNode, Shape, classify, node_kind, physical_type,
};

use crate::{
    naming::sanitize_identifier,
    tag::{Role, StructTag},
};

/// Maximum nesting depth accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for [`render_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest nesting below the root that renders; anything deeper fails
    /// with [`SchemaError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Renders the root of a schema tree as a Go struct body (`struct {...}`).
pub fn render(root: &SchemaNode) -> Result<String, SchemaError> {
    render_with_options(root, &RenderOptions::default())
}

pub fn render_with_options(
    root: &SchemaNode,
    options: &RenderOptions,
) -> Result<String, SchemaError> {
    let path = FieldPath::new(sanitize_identifier(root.name()));
    let renderer = Renderer { options };
    match classify(root, &path)? {
        Shape::Struct(children) => renderer.struct_body(children, &path),
        // Roots are groups in practice; anything else renders as its bare type.
        _ => renderer.node_type(root, &path).map(|rendered| rendered.go_type),
    }
}

/// Renders `type <Root> struct {...}`, naming the type after the root node.
pub fn render_declaration(root: &SchemaNode) -> Result<String, SchemaError> {
    render_declaration_with_options(root, &RenderOptions::default())
}

pub fn render_declaration_with_options(
    root: &SchemaNode,
    options: &RenderOptions,
) -> Result<String, SchemaError> {
    let body = render_with_options(root, options)?;
    Ok(format!("type {} {body}", sanitize_identifier(root.name())))
}

struct Renderer<'o> {
    options: &'o RenderOptions,
}

/// Go type of a node before its repetition wrapper, with the tag entries it contributes.
struct Rendered {
    go_type: String,
    /// Entries describing the node itself, placed before `repetitiontype`.
    tag: StructTag,
    /// Key and value entries of containers, placed after `repetitiontype`.
    members: StructTag,
}

impl Renderer<'_> {
    fn struct_body(
        &self,
        children: &[SchemaNode],
        path: &FieldPath,
    ) -> Result<String, SchemaError> {
        let mut out = String::from("struct {\n");
        for child in children {
            let name = sanitize_identifier(child.name());
            let child_path = path.child(name.as_str());
            let rendered = self.node_type(child, &child_path)?;

            let mut tag = StructTag::new();
            tag.push("name", child.name())
                .extend(rendered.tag)
                .push("repetitiontype", child.repetition())
                .extend(rendered.members);

            let go_type = wrap_repetition(child.repetition(), rendered.go_type);
            // Writing into a `String` cannot fail.
            let _ = writeln!(out, "{name} {go_type} {tag}");
        }
        out.push('}');
        Ok(out)
    }

    fn node_type(&self, node: &SchemaNode, path: &FieldPath) -> Result<Rendered, SchemaError> {
        if path.depth() > self.options.max_depth {
            return Err(SchemaError::DepthExceeded {
                max_depth: self.options.max_depth,
                path: path.clone(),
            });
        }

        match classify(node, path)? {
            Shape::Scalar(physical) => Ok(Rendered {
                go_type: go_scalar_type(node, physical, false).to_string(),
                tag: StructTag::scalar(node, physical),
                members: StructTag::new(),
            }),
            Shape::Struct(children) => Ok(Rendered {
                go_type: self.struct_body(children, path)?,
                tag: StructTag::new(),
                members: StructTag::new(),
            }),
            Shape::List { element, two_level } => self.list_type(path, element, two_level),
            Shape::Map { key, value } => self.map_type(path, key, value),
        }
    }

    fn list_type(
        &self,
        path: &FieldPath,
        element: &SchemaNode,
        two_level: bool,
    ) -> Result<Rendered, SchemaError> {
        let element_path = path.child(sanitize_identifier(element.name()));
        let physical = scalar_physical(element, &element_path, || {
            SchemaError::UnsupportedCompositeListElement { path: path.clone() }
        })?;

        let element_type = go_scalar_type(element, physical, false);
        let go_type = if two_level {
            format!("[]{element_type}")
        } else {
            let element_type = wrap_repetition(element.repetition(), element_type.to_string());
            format!("[]{element_type}")
        };

        let mut tag = StructTag::new();
        tag.push("type", ConvertedType::List);
        Ok(Rendered {
            go_type,
            tag,
            members: StructTag::member(Role::Value, element, physical),
        })
    }

    fn map_type(
        &self,
        path: &FieldPath,
        key: &SchemaNode,
        value: &SchemaNode,
    ) -> Result<Rendered, SchemaError> {
        let key_path = path.child(sanitize_identifier(key.name()));
        let key_physical = scalar_physical(key, &key_path, || {
            SchemaError::UnsupportedCompositeMapKey { path: path.clone() }
        })?;
        let value_path = path.child(sanitize_identifier(value.name()));
        let value_physical = scalar_physical(value, &value_path, || {
            SchemaError::UnsupportedCompositeMapValue { path: path.clone() }
        })?;

        let key_type = go_scalar_type(key, key_physical, true);
        let value_type = wrap_repetition(
            value.repetition(),
            go_scalar_type(value, value_physical, false).to_string(),
        );

        let mut tag = StructTag::new();
        tag.push("type", ConvertedType::Map);
        let mut members = StructTag::member(Role::Key, key, key_physical);
        members.extend(StructTag::member(Role::Value, value, value_physical));
        Ok(Rendered {
            go_type: format!("map[{key_type}]{value_type}"),
            tag,
            members,
        })
    }
}

/// Physical type of a container member, failing with `composite` unless the
/// member is a scalar. The check runs before anything below the member is
/// looked at.
fn scalar_physical(
    node: &SchemaNode,
    path: &FieldPath,
    composite: impl FnOnce() -> SchemaError,
) -> Result<PhysicalType, SchemaError> {
    let kind = node_kind(node, path)?;
    match (kind, physical_type(node, path)?) {
        (NodeKind::Scalar, Some(physical)) => Ok(physical),
        _ => Err(composite()),
    }
}

fn wrap_repetition(repetition: Repetition, go_type: String) -> String {
    match repetition {
        Repetition::Required => go_type,
        Repetition::Optional => format!("*{go_type}"),
        Repetition::Repeated => format!("[]{go_type}"),
    }
}

/// Go type for a scalar leaf.
///
/// Integer annotations select the matching sized Go integer; text
/// annotations on byte arrays select `string`. Decimal, date and time
/// annotations have no dedicated Go type and keep the physical mapping.
/// `map_key` forces binary values to `string`, since Go map keys must be
/// comparable.
pub fn go_scalar_type(node: &SchemaNode, physical: PhysicalType, map_key: bool) -> &'static str {
    match physical {
        PhysicalType::Boolean => "bool",
        PhysicalType::Int32 => match int_annotation(node) {
            Some((8, true)) => "int8",
            Some((16, true)) => "int16",
            Some((8, false)) => "uint8",
            Some((16, false)) => "uint16",
            Some((32, false)) => "uint32",
            _ => "int32",
        },
        PhysicalType::Int64 => match int_annotation(node) {
            Some((64, false)) => "uint64",
            _ => "int64",
        },
        PhysicalType::Int96 => "string",
        PhysicalType::Float => "float32",
        PhysicalType::Double => "float64",
        PhysicalType::ByteArray if is_text(node) || map_key => "string",
        PhysicalType::FixedLenByteArray if map_key => "string",
        PhysicalType::ByteArray | PhysicalType::FixedLenByteArray => "[]byte",
    }
}

/// Bit width and signedness from the logical or converted integer annotation.
fn int_annotation(node: &SchemaNode) -> Option<(i8, bool)> {
    if let Some(LogicalType::Integer { bit_width, signed }) = node.logical_type() {
        return Some((bit_width, signed));
    }
    match node.converted_type()? {
        ConvertedType::Int8 => Some((8, true)),
        ConvertedType::Int16 => Some((16, true)),
        ConvertedType::Int32 => Some((32, true)),
        ConvertedType::Int64 => Some((64, true)),
        ConvertedType::Uint8 => Some((8, false)),
        ConvertedType::Uint16 => Some((16, false)),
        ConvertedType::Uint32 => Some((32, false)),
        ConvertedType::Uint64 => Some((64, false)),
        _ => None,
    }
}

fn is_text(node: &SchemaNode) -> bool {
    let text_logical = matches!(
        node.logical_type(),
        Some(LogicalType::String) | Some(LogicalType::Enum) | Some(LogicalType::Json)
    );
    let text_converted = matches!(
        node.converted_type(),
        Some(ConvertedType::Utf8) | Some(ConvertedType::Enum) | Some(ConvertedType::Json)
    );
    text_logical || text_converted
}
