use std::fmt::{Display, Formatter, Result, Write};

use pqschema_core::{ConvertedType, LogicalType, PhysicalType, SchemaNode};

/// `parquet:"key=value, ..."` struct tag attached to a rendered field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag {
    entries: Vec<(&'static str, String)>,
}

impl StructTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.entries.push((key, value.to_string()));
        self
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn extend(&mut self, other: StructTag) -> &mut Self {
        self.entries.extend(other.entries);
        self
    }

    /// Physical type and annotations of a scalar leaf.
    pub(crate) fn scalar(node: &SchemaNode, physical: PhysicalType) -> Self {
        let mut tag = Self::new();
        tag.push("type", physical)
            .push_opt("convertedtype", node.converted_type());
        if physical == PhysicalType::FixedLenByteArray {
            tag.push_opt("length", node.type_length());
        }
        if let Some((scale, precision)) = decimal_params(node) {
            tag.push("scale", scale).push("precision", precision);
        }
        tag
    }

    /// Element, key or value entries of a container, prefixed with `role`.
    pub(crate) fn member(role: Role, node: &SchemaNode, physical: PhysicalType) -> Self {
        let (type_key, converted_key) = match role {
            Role::Key => ("keytype", "keyconvertedtype"),
            Role::Value => ("valuetype", "valueconvertedtype"),
        };
        let converted = node.converted_type().map(ConvertedType::name);
        let mut tag = Self::new();
        tag.push(type_key, physical).push_opt(converted_key, converted);
        tag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Key,
    Value,
}

fn decimal_params(node: &SchemaNode) -> Option<(i32, i32)> {
    match node.logical_type() {
        Some(LogicalType::Decimal { scale, precision }) => Some((scale, precision)),
        _ => None,
    }
}

impl Display for StructTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("`parquet:\"")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            write_escaped(f, value)?;
        }
        f.write_str("\"`")
    }
}

/// Writes `value` with tag delimiters and control characters as `%XX`, so
/// any raw field name stays inside one tag on one line.
fn write_escaped(f: &mut Formatter<'_>, value: &str) -> Result {
    for c in value.chars() {
        match c {
            '%' | '"' | '`' | '\\' | ',' => write!(f, "%{:02X}", c as u32)?,
            c if c.is_ascii_control() => write!(f, "%{:02X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
