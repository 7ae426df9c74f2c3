//! Error type for schema classification and rendering.

use crate::FieldPath;

/// Reasons a schema tree cannot be classified or rendered.
///
/// Every variant names the field where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A node has neither a physical type nor children.
    #[error("type not set in field {path}")]
    TypeNotSet { path: FieldPath },

    /// A leaf carries a physical type code outside the known enumeration.
    #[error("unknown type: {code} in field {path}")]
    UnknownPhysicalType { code: i32, path: FieldPath },

    #[error("go struct does not support composite type as map key in field {path}")]
    UnsupportedCompositeMapKey { path: FieldPath },

    #[error("go struct does not support composite type as map value in field {path}")]
    UnsupportedCompositeMapValue { path: FieldPath },

    #[error("go struct does not support composite type as list element in field {path}")]
    UnsupportedCompositeListElement { path: FieldPath },

    /// A LIST or MAP annotation sits on a group that does not follow the container layout.
    #[error("malformed {container} in field {path}: {detail}")]
    MalformedContainer {
        container: &'static str,
        path: FieldPath,
        detail: String,
    },

    #[error("schema nesting exceeds {max_depth} levels in field {path}")]
    DepthExceeded { max_depth: usize, path: FieldPath },
}
