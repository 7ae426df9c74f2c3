pub mod render_raw;
pub mod schema;

use std::{fs, path::Path};

use anyhow::Result;

/// Writes `text` to `output`, or stdout when no path is given.
pub(crate) fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))?,
        None => println!("{text}"),
    }
    Ok(())
}
