//! Pokedex CLI - explore the game world and catch creatures
//!
//! An interactive command-line client over the PokeAPI. Reads commands from
//! standard input, one per line, and prints results to standard output. API
//! responses are cached in memory for the configured TTL so paging back and
//! forth does not refetch the same pages.

mod app;
mod cache;
mod cli;
mod data;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use app::App;
use cache::Cache;
use cli::{Cli, StartupConfig};
use data::ApiClient;

/// Prints the prompt and flushes so it appears before the read blocks
fn prompt() -> io::Result<()> {
    print!("Pokedex > ");
    io::stdout().flush()
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let cache = Cache::new(config.cache_ttl);
    let mut app = App::new(ApiClient::new(config.base_url, cache.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if let Err(e) = prompt() {
            eprintln!("{}", e);
            break;
        }

        match lines.next_line().await {
            Ok(Some(line)) => {
                // Command errors are printed and the loop continues; only the
                // exit command ends the session.
                if let Err(e) = app.execute_line(&line).await {
                    println!("{}", e);
                }
                if app.should_quit {
                    break;
                }
            }
            // End of input behaves like an exit command.
            Ok(None) => break,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    cache.shutdown().await;
    ExitCode::SUCCESS
}
