// Stackgen - Go (Chi) + React project scaffolding
// Main CLI entry point

use clap::Parser;
use stackgen::cli::{Cli, CliDispatcher};
use stackgen::utils::error::UserError;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command).await;

    if let Err(err) = result {
        let user_error = UserError::from_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
