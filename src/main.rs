use anyhow::Result;
use clap::{Parser, Subcommand};

use signature_handler::commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Install signature handler UI components into an application", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish signature handler component stubs into the project
    Install {
        /// Overwrite component files that already exist
        #[arg(long)]
        force: bool,

        /// Publish a specific stub group instead of the configured one
        #[arg(long)]
        tag: Option<String>,
    },

    /// List the stub groups this installer can publish
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { force, tag } => {
            let exit_code = commands::install::execute(force, tag)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::List => {
            commands::list::execute()?;
        }
    }

    Ok(())
}
