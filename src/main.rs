//! Taskdeck CLI
//!
//! Command-line front end for the to-do API:
//! - List and search tasks
//! - Add, delete, and toggle tasks
//! - Interactive shell
//! - Config file generation

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use taskdeck::board::{sync, TaskBoard};
use taskdeck::client::HttpTaskApi;
use taskdeck::config::{generate_default_config, Config};
use taskdeck::logging::init_logging;
use taskdeck::render::{render, OutputFormat};
use taskdeck::shell::run_shell;
use taskdeck::task::TaskId;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage your to-do list from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and TASKDECK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tasks, newest first
    List {
        /// Only show tasks containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,
    },

    /// Mark a task complete, or incomplete if it already is
    Toggle {
        /// Task id
        id: TaskId,
    },

    /// Interactive session
    Shell,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::debug!(base_url = %config.api.base_url, "Starting taskdeck");

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let api = HttpTaskApi::new(&config.api.client_config())?;
    let mut board = TaskBoard::new();

    if let Commands::Shell = cli.command {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_shell(&mut board, &api, stdin, tokio::io::stdout(), cli.format).await?;
        return Ok(());
    }

    // Every one-shot command starts from the server's list
    sync::load(&mut board, &api).await?;

    match cli.command {
        Commands::List { search } => {
            if let Some(term) = search {
                board.set_search_term(term);
            }
        }
        Commands::Add { text } => sync::add(&mut board, &api, &text.join(" ")).await?,
        Commands::Delete { id } => sync::delete(&mut board, &api, id).await?,
        Commands::Toggle { id } => {
            if board.task(id).is_none() {
                bail!("No task with id {}", id);
            }
            sync::toggle(&mut board, &api, id).await?
        }
        Commands::Shell | Commands::Config { .. } => {}
    }

    println!("{}", render(&board, cli.format));
    Ok(())
}
