//! Shape classification of schema nodes.
//!
//! [`node_kind`] answers "is this composite?" from the node alone;
//! [`classify`] additionally resolves the children a renderer recurses into.

use crate::{ConvertedType, FieldPath, LogicalType, PhysicalType, SchemaError, SchemaNode};

/// Payload-free shape of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Struct,
    List,
    Map,
}

impl NodeKind {
    pub fn is_composite(self) -> bool {
        !matches!(self, NodeKind::Scalar)
    }
}

/// Resolved shape of a node, borrowing the nodes a renderer descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Scalar(PhysicalType),
    Struct(&'a [SchemaNode]),
    List {
        element: &'a SchemaNode,
        /// The element is the repeated group itself (legacy two-level list),
        /// so its own repetition is already accounted for by the list.
        two_level: bool,
    },
    Map {
        key: &'a SchemaNode,
        value: &'a SchemaNode,
    },
}

impl Shape<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Shape::Scalar(_) => NodeKind::Scalar,
            Shape::Struct(_) => NodeKind::Struct,
            Shape::List { .. } => NodeKind::List,
            Shape::Map { .. } => NodeKind::Map,
        }
    }
}

/// Validated physical type of `node`: `None` for groups.
pub fn physical_type(
    node: &SchemaNode,
    path: &FieldPath,
) -> Result<Option<PhysicalType>, SchemaError> {
    match node.physical_code() {
        None if node.children().is_empty() => Err(SchemaError::TypeNotSet { path: path.clone() }),
        None => Ok(None),
        Some(code) => PhysicalType::from_code(code)
            .map(Some)
            .ok_or_else(|| SchemaError::UnknownPhysicalType {
                code,
                path: path.clone(),
            }),
    }
}

pub fn is_list_annotated(node: &SchemaNode) -> bool {
    node.converted_type() == Some(ConvertedType::List)
        || node.logical_type() == Some(LogicalType::List)
}

pub fn is_map_annotated(node: &SchemaNode) -> bool {
    matches!(
        node.converted_type(),
        Some(ConvertedType::Map | ConvertedType::MapKeyValue)
    ) || node.logical_type() == Some(LogicalType::Map)
}

/// Determines the shape of `node` without looking at its descendants.
///
/// Container annotations take precedence over the physical type.
pub fn node_kind(node: &SchemaNode, path: &FieldPath) -> Result<NodeKind, SchemaError> {
    let physical = physical_type(node, path)?;
    let kind = if is_list_annotated(node) {
        NodeKind::List
    } else if is_map_annotated(node) {
        NodeKind::Map
    } else if physical.is_some() {
        NodeKind::Scalar
    } else {
        NodeKind::Struct
    };
    Ok(kind)
}

/// Determines the shape of `node` and resolves list elements and map entries.
pub fn classify<'a>(node: &'a SchemaNode, path: &FieldPath) -> Result<Shape<'a>, SchemaError> {
    let physical = physical_type(node, path)?;
    if is_list_annotated(node) {
        return list_shape(node, path);
    }
    if is_map_annotated(node) {
        return map_shape(node, path);
    }
    Ok(match physical {
        Some(physical) => Shape::Scalar(physical),
        None => Shape::Struct(node.children()),
    })
}

fn list_shape<'a>(node: &'a SchemaNode, path: &FieldPath) -> Result<Shape<'a>, SchemaError> {
    let [repeated] = node.children() else {
        return Err(malformed(
            "LIST",
            path,
            format!("expected 1 child, found {}", node.children().len()),
        ));
    };
    if !repeated.is_repeated() {
        return Err(malformed(
            "LIST",
            path,
            format!("child `{}` is not repeated", repeated.name()),
        ));
    }

    let two_level = repeated.physical_code().is_some()
        || repeated.children().len() != 1
        || repeated.name() == "array"
        || repeated.name() == format!("{}_tuple", node.name());
    let element = if two_level {
        repeated
    } else {
        &repeated.children()[0]
    };
    Ok(Shape::List { element, two_level })
}

fn map_shape<'a>(node: &'a SchemaNode, path: &FieldPath) -> Result<Shape<'a>, SchemaError> {
    let [key_value] = node.children() else {
        return Err(malformed(
            "MAP",
            path,
            format!("expected 1 child, found {}", node.children().len()),
        ));
    };
    if !key_value.is_repeated() {
        return Err(malformed(
            "MAP",
            path,
            format!("child `{}` is not repeated", key_value.name()),
        ));
    }
    let [key, value] = key_value.children() else {
        return Err(malformed(
            "MAP",
            path,
            format!(
                "group `{}` expected 2 children, found {}",
                key_value.name(),
                key_value.children().len()
            ),
        ));
    };
    Ok(Shape::Map { key, value })
}

fn malformed(container: &'static str, path: &FieldPath, detail: String) -> SchemaError {
    SchemaError::MalformedContainer {
        container,
        path: path.clone(),
        detail,
    }
}
