//! Qubitverse Command-Line Interface
//!
//! Drives the circuit editor's control panel from the terminal: reads a saved
//! editor snapshot, encodes it and talks to the simulator.
//!
//! ```text
//! qubitverse encode -i bell.json
//! qubitverse probability -i bell.json --endpoint http://sim:9080/api/endpoint
//! qubitverse add-qubit -i bell.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qubitverse_circuit::Mode;
use qubitverse_client::{Control, DEFAULT_ENDPOINT, ENDPOINT_ENV};

mod commands;

use commands::common::Connection;
use commands::{encode, qubits, send, version};

/// Qubitverse - send circuits from the editor to the simulator
#[derive(Parser)]
#[command(name = "qubitverse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Simulator endpoint
    #[arg(long, global = true, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the request body for an editor snapshot
    Encode {
        /// Editor snapshot (JSON)
        #[arg(short, long)]
        input: String,

        /// Action to encode for (calculate, probability, measure or 0-2)
        #[arg(short, long, default_value = "calculate")]
        mode: Mode,

        /// Print the sorted gate list as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Run the Calculate action
    Calculate {
        /// Editor snapshot (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Run the Probability action
    Probability {
        /// Editor snapshot (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Run the Measure action
    Measure {
        /// Editor snapshot (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Add a wire to a saved editor snapshot
    AddQubit {
        /// Editor snapshot (JSON), rewritten in place
        #[arg(short, long)]
        input: String,
    },

    /// Remove a wire from a saved editor snapshot
    DeleteQubit {
        /// Editor snapshot (JSON), rewritten in place
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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
        .init();

    let connection = Connection {
        endpoint: cli.endpoint,
        timeout_secs: cli.timeout_secs,
    };

    let result = match cli.command {
        Commands::Encode { input, mode, json } => encode::execute(&input, mode, json),

        Commands::Calculate { input } => {
            send::execute(&input, Control::Calculate, &connection).await
        }
        Commands::Probability { input } => {
            send::execute(&input, Control::Probability, &connection).await
        }
        Commands::Measure { input } => send::execute(&input, Control::Measure, &connection).await,

        Commands::AddQubit { input } => qubits::execute(&input, Control::AddQubit),
        Commands::DeleteQubit { input } => qubits::execute(&input, Control::DeleteQubit),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
