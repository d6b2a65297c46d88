mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pkgnav")]
#[command(about = "Find and act on the nearest package.json for any file in a workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root (repeatable); defaults to pkgnav.toml or the enclosing repository
    #[arg(long, global = true)]
    root: Vec<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, action, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of the nearest package.json
    Locate {
        file: Option<PathBuf>,
        #[arg(long, action)]
        relative: bool,
        #[arg(long, action)]
        json: bool,
    },
    /// Print the package name from the nearest package.json
    Name {
        file: Option<PathBuf>,
        #[arg(long, action)]
        json: bool,
    },
    /// Print the directory containing the nearest package.json
    Dir {
        file: Option<PathBuf>,
        #[arg(long, action)]
        json: bool,
    },
    /// Show the nearest package with its workspace context
    Info {
        file: Option<PathBuf>,
        #[arg(long, action)]
        json: bool,
    },
    /// Open the nearest package.json in $VISUAL or $EDITOR
    Open {
        file: Option<PathBuf>,
    },
    /// Start a shell in the nearest package's directory
    Shell {
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Locate {
            file,
            relative,
            json,
        } => commands::cmd_locate(&cli.root, file, relative, json)?,
        Commands::Name { file, json } => commands::cmd_name(&cli.root, file, json)?,
        Commands::Dir { file, json } => commands::cmd_dir(&cli.root, file, json)?,
        Commands::Info { file, json } => commands::cmd_info(&cli.root, file, json)?,
        Commands::Open { file } => commands::cmd_open(&cli.root, file)?,
        Commands::Shell { file } => commands::cmd_shell(&cli.root, file)?,
    }

    Ok(())
}
