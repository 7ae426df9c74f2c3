use serde::{Deserialize, Serialize};

use crate::{ConvertedType, LogicalType, PhysicalType, Repetition};

/// One field or group in a Parquet schema tree.
///
/// Leaves carry a physical type, groups carry children. The physical type is
/// kept as its raw Thrift code so that codes outside [`PhysicalType`] can be
/// represented and rejected at classification time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaNode {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    physical_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    converted_type: Option<ConvertedType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logical_type: Option<LogicalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repetition_type: Option<Repetition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn primitive(
        name: impl Into<String>,
        physical_type: PhysicalType,
        repetition: Repetition,
    ) -> Self {
        Self {
            name: name.into(),
            physical_type: Some(physical_type.code()),
            repetition_type: Some(repetition),
            ..Default::default()
        }
    }

    pub fn group(
        name: impl Into<String>,
        repetition: Repetition,
        children: impl IntoIterator<Item = SchemaNode>,
    ) -> Self {
        Self {
            name: name.into(),
            repetition_type: Some(repetition),
            children: children.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Root group of a schema; roots carry no repetition.
    pub fn root(name: impl Into<String>, children: impl IntoIterator<Item = SchemaNode>) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Three-level LIST: `<name> (LIST) { repeated group list { <element> } }`.
    pub fn list(name: impl Into<String>, repetition: Repetition, element: SchemaNode) -> Self {
        Self::group(
            name,
            repetition,
            [Self::group("list", Repetition::Repeated, [element])],
        )
        .with_converted_type(ConvertedType::List)
        .with_logical_type(LogicalType::List)
    }

    /// MAP: `<name> (MAP) { repeated group key_value { <key> <value> } }`.
    pub fn map(
        name: impl Into<String>,
        repetition: Repetition,
        key: SchemaNode,
        value: SchemaNode,
    ) -> Self {
        Self::group(
            name,
            repetition,
            [Self::group("key_value", Repetition::Repeated, [key, value])],
        )
        .with_converted_type(ConvertedType::Map)
        .with_logical_type(LogicalType::Map)
    }

    pub fn with_physical_code(mut self, code: Option<i32>) -> Self {
        self.physical_type = code;
        self
    }

    pub fn with_type_length(mut self, length: i32) -> Self {
        self.type_length = Some(length);
        self
    }

    pub fn with_converted_type(mut self, converted: ConvertedType) -> Self {
        self.converted_type = Some(converted);
        self
    }

    pub fn with_logical_type(mut self, logical: LogicalType) -> Self {
        self.logical_type = Some(logical);
        self
    }

    pub fn with_repetition(mut self, repetition: Option<Repetition>) -> Self {
        self.repetition_type = repetition;
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SchemaNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw Thrift physical type code, if this node is a leaf.
    pub fn physical_code(&self) -> Option<i32> {
        self.physical_type
    }

    pub fn type_length(&self) -> Option<i32> {
        self.type_length
    }

    pub fn converted_type(&self) -> Option<ConvertedType> {
        self.converted_type
    }

    pub fn logical_type(&self) -> Option<LogicalType> {
        self.logical_type
    }

    pub fn repetition_type(&self) -> Option<Repetition> {
        self.repetition_type
    }

    /// Repetition with an absent annotation read as required.
    pub fn repetition(&self) -> Repetition {
        self.repetition_type.unwrap_or_default()
    }

    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    pub fn is_optional(&self) -> bool {
        self.repetition() == Repetition::Optional
    }

    pub fn is_repeated(&self) -> bool {
        self.repetition() == Repetition::Repeated
    }

    /// Descendant reached by following child indices from this node.
    pub fn descendant(&self, indices: &[usize]) -> Option<&SchemaNode> {
        indices
            .iter()
            .try_fold(self, |node, &i| node.children.get(i))
    }

    /// Returns a copy of this tree with the descendant at `indices` edited by `patch`.
    ///
    /// Used to build malformed trees without mutating a shared one. Returns
    /// `None` when `indices` does not address a node.
    pub fn patched(&self, indices: &[usize], patch: impl FnOnce(&mut SchemaNode)) -> Option<Self> {
        let mut copy = self.clone();
        let mut target = &mut copy;
        for &i in indices {
            target = target.children.get_mut(i)?;
        }
        patch(target);
        Some(copy)
    }

    // Setters below are meant for `patched` callbacks.

    pub fn set_physical_code(&mut self, code: Option<i32>) {
        self.physical_type = code;
    }

    pub fn set_converted_type(&mut self, converted: Option<ConvertedType>) {
        self.converted_type = converted;
    }

    pub fn set_logical_type(&mut self, logical: Option<LogicalType>) {
        self.logical_type = logical;
    }
}
