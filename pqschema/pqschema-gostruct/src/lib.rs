//! Go struct rendering for `pqschema` schema trees.
//!
//! [`render`] walks a [`SchemaNode`](pqschema_core::SchemaNode) tree and
//! produces an anonymous Go `struct {...}` type with one field per child,
//! `parquet:"..."` tags carrying the original names and annotations.
//! Rendering is all-or-nothing: any node that Go structs cannot express
//! (composite list elements, composite map keys or values) fails the whole
//! call with a [`SchemaError`](pqschema_core::SchemaError).
//!
//! # Typical Flow
//! ```rust
//! use pqschema_core::{PhysicalType, Repetition, SchemaNode};
//! use pqschema_gostruct::{indent_go, render_declaration};
//!
//! let root = SchemaNode::root(
//!     "parquet_go_root",
//!     [SchemaNode::primitive("id", PhysicalType::Int64, Repetition::Required)],
//! );
//! let text = render_declaration(&root).unwrap();
//! assert_eq!(
//!     text,
//!     "type Parquet_go_root struct {\nId int64 `parquet:\"name=id, type=INT64, repetitiontype=REQUIRED\"`\n}"
//! );
//! let _pretty = indent_go(&text);
//! ```
pub mod layout;
pub mod naming;
pub mod render;
pub mod tag;

pub use layout::{compact_go, indent_go};
pub use naming::sanitize_identifier;
pub use render::{
    DEFAULT_MAX_DEPTH, RenderOptions, go_scalar_type, render, render_declaration,
    render_declaration_with_options, render_with_options,
};
pub use tag::StructTag;
