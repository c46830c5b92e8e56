//! pwd-meter CLI - check, save and export passwords from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use pwd_meter::Config;

mod commands;

use commands::Status;

#[derive(Parser)]
#[command(name = "pwd-meter", version, about = "Password strength meter with local history")]
struct Cli {
    /// History file (overrides PWD_HISTORY_PATH)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check password strength
    Check {
        /// Password to check (read from stdin when omitted)
        password: Option<String>,
    },

    /// Save a password to the history
    Save {
        /// Password to save (read from stdin when omitted)
        password: Option<String>,
    },

    /// List the saved passwords
    History,

    /// Delete the whole history
    Clear,

    /// Export the history as an .xlsx workbook
    Export {
        /// Output file (overrides PWD_EXPORT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Read actions from stdin, keeping session state between them
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::from_env();
    if let Some(path) = cli.history_file {
        config.history_path = path;
    }
    tracing::debug!("Using history file {:?}", config.history_path);

    let result = match cli.command {
        Commands::Check { password } => commands::check(password),
        Commands::Save { password } => commands::save(&config, password),
        Commands::History => commands::history(&config),
        Commands::Clear => commands::clear(&config),
        Commands::Export { output } => {
            if let Some(path) = output {
                config.export_path = path;
            }
            commands::export(&config)
        }
        Commands::Interactive => commands::interactive(&config),
    };

    match result {
        Ok(Status::Done) => {}
        Ok(Status::Blocked) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
