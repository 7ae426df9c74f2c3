//! Format-agnostic Parquet schema tree for `pqschema`.
//!
//! This crate provides the immutable [`SchemaNode`] tree built from Parquet
//! footer metadata, the Parquet type enumerations it is annotated with, and
//! the classifier ([`node_kind`] / [`classify`]) that renderers dispatch on.

mod classify;
mod error;
mod node;
mod path;
mod types;

pub use classify::{
    NodeKind, Shape, classify, is_list_annotated, is_map_annotated, node_kind, physical_type,
};
pub use error::SchemaError;
pub use node::SchemaNode;
pub use path::FieldPath;
pub use types::{ConvertedType, LogicalType, PhysicalType, Repetition, TimeUnit};
