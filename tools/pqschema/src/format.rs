use anyhow::Result;
use clap::ValueEnum;
use pqschema_core::SchemaNode;
use pqschema_gostruct::{RenderOptions, indent_go, render_declaration_with_options};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SchemaFormat {
    /// Go struct declaration
    #[default]
    Go,
    /// Schema tree as JSON
    Raw,
}

/// Renders `root` in `format`; `pretty` selects gofmt layout for Go output.
pub fn render_schema(
    root: &SchemaNode,
    format: SchemaFormat,
    pretty: bool,
    options: &RenderOptions,
) -> Result<String> {
    let text = match format {
        SchemaFormat::Go => {
            let text = render_declaration_with_options(root, options)?;
            if pretty { indent_go(&text) } else { text }
        }
        SchemaFormat::Raw => {
            if pretty {
                serde_json::to_string_pretty(root)?
            } else {
                serde_json::to_string(root)?
            }
        }
    };
    Ok(text)
}
