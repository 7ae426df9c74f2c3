use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pqschema_gostruct::{DEFAULT_MAX_DEPTH, RenderOptions};
use pqschema_parquet::schema_tree_from_path;
use tracing::debug;

use crate::format::{SchemaFormat, render_schema};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the parquet file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = SchemaFormat::Go)]
    format: SchemaFormat,

    /// Indent Go output gofmt-style, pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Maximum nesting depth accepted by the renderer
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        debug!(path = %self.input.display(), "reading parquet footer");
        let root = schema_tree_from_path(&self.input)?;
        debug!(
            root = root.name(),
            fields = root.children().len(),
            "built schema tree"
        );

        let options = RenderOptions {
            max_depth: self.max_depth,
        };
        let text = render_schema(&root, self.format, self.pretty, &options)?;
        debug!(format = ?self.format, bytes = text.len(), "rendered schema");

        super::emit(&text, self.output.as_deref())
    }
}
