//! Qircuit Command-Line Interface
//!
//! Reads a circuit table and a gate-definition table, then draws the
//! partitioned circuit or reports how each gate classifies for distributed
//! simulation.
//!
//! ```text
//! $ qircuit draw --circuit bell.csv --gates gates.csv
//!  ¦   ¦¦   ¦
//! 0¦―□―¦¦―•―¦
//!  ¦   ¦¦   ¦
//!  ¦   ¦¦   ¦
//!  ¦   ¦¦   ¦
//! 1¦―――¦¦―⊕―¦
//!  ¦   ¦¦   ¦
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{classify, draw, summary, version};

/// Qircuit - partitioned quantum circuit inspection
#[derive(Parser)]
#[command(name = "qircuit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// The two tables a circuit is built from.
#[derive(Args)]
struct TableArgs {
    /// Circuit table (one gate per row: name, index-partition, ...)
    #[arg(short, long)]
    circuit: PathBuf,

    /// Gate-definition table (one gate per row: name, matrix)
    #[arg(short, long, env = "QIRCUIT_GATES")]
    gates: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the circuit as an ASCII diagram
    Draw {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Classify every gate (locality, diagonal, structure, CNOT)
    Classify {
        #[command(flatten)]
        tables: TableArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show qubit, gate and partition counts
    Summary {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Draw { tables } => draw::execute(&tables.circuit, &tables.gates),
        Commands::Classify { tables, format } => {
            classify::execute(&tables.circuit, &tables.gates, &format)
        }
        Commands::Summary { tables } => summary::execute(&tables.circuit, &tables.gates),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
