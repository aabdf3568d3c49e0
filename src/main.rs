//! FactoAtlas - A TUI employee self-service portal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use factoatlas::common::prelude::*;

/// FactoAtlas - A TUI employee self-service portal
#[derive(Parser, Debug)]
#[command(name = "facto")]
#[command(about = "A TUI employee self-service portal", long_about = None)]
struct Args {
    /// Path to the portal data snapshot (JSON)
    #[arg(value_name = "DATA")]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    factoatlas::run(args.data.as_deref())
}
