use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pqschema_core::SchemaNode;
use pqschema_gostruct::{DEFAULT_MAX_DEPTH, RenderOptions};
use tracing::debug;

use crate::format::{SchemaFormat, render_schema};

#[derive(Args)]
pub struct RenderRawArgs {
    /// Path to a schema tree in raw JSON form (as printed by `schema --format raw`)
    input: PathBuf,

    /// Indent output gofmt-style
    #[arg(long)]
    pretty: bool,

    /// Maximum nesting depth accepted by the renderer
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderRawArgs {
    pub fn run(self) -> Result<()> {
        let input = self.input.display();
        let buf = fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read '{input}'"))?;
        let root: SchemaNode = serde_json::from_str(&buf)
            .with_context(|| format!("invalid schema tree in '{input}'"))?;
        debug!(root = root.name(), "loaded raw schema tree");

        let options = RenderOptions {
            max_depth: self.max_depth,
        };
        let text = render_schema(&root, SchemaFormat::Go, self.pretty, &options)?;
        super::emit(&text, self.output.as_deref())
    }
}
