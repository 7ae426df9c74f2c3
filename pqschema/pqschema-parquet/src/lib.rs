//! Schema tree builder over the `parquet` crate.
//!
//! Turns the footer schema of a Parquet file into a
//! [`SchemaNode`](pqschema_core::SchemaNode) tree. Renderers only ever see
//! the resulting tree and never touch the file.

mod builder;
mod error;

pub use builder::{schema_tree, schema_tree_from_path};
pub use error::BuildError;
