// CLI module for command-line interface

pub mod init;

use clap::{Parser, Subcommand};

use crate::utils::error::Result;

use self::init::InitCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "stackgen")]
#[command(about = "Scaffold Go (Chi) + React + Tailwind + Postgres projects")]
#[command(long_about = r#"Stackgen materializes a ready-to-hack web project: a Go backend wired
for chi, pgx and goose, a Postgres docker-compose file, and a
Vite + React + Tailwind frontend bootstrapped with bun.

Layout of a scaffolded project:
  cmd/web/            Go server entry point and handlers
  internal/           application packages
  ui/html/            server-rendered markup
  ui/static/          Vite + React frontend
  docker-compose.yml  Postgres 15, database named after the project

Examples:
  stackgen init demo          Scaffold ./demo and bootstrap its frontend
  stackgen init demo --json   Same, but print a machine-readable report

The frontend bootstrap requires bun and bunx on PATH."#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new project directory
    #[command(long_about = r#"Scaffold a new project under ./<name>.

Creates the backend directory tree, writes the Go module manifest,
server entry point, docker-compose file and README, then delegates to
bun to scaffold and configure the Vite + React + Tailwind frontend
under ui/static.

Re-running against an existing directory does not fail on the
directories that already exist, but every generated file is written
again, discarding local edits.

Examples:
  stackgen init demo            Scaffold ./demo
  stackgen init demo --json     Emit the scaffold report as JSON"#)]
    Init {
        /// Project name, used as the directory name and embedded in the
        /// generated manifests
        name: String,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Init { name, json } => {
                let cmd = InitCommand { name, json };
                cmd.run().await
            }
        }
    }
}
