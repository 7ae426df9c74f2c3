mod commands;
mod format;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render_raw::RenderRawArgs, schema::SchemaArgs};

#[derive(Parser)]
#[command(name = "pqschema", version, about = "Print Parquet schemas as Go structs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schema of a parquet file
    Schema(SchemaArgs),
    /// Render a raw JSON schema tree as a Go struct
    RenderRaw(RenderRawArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::RenderRaw(args) => args.run(),
    }
}
