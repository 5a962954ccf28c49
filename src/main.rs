mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let res = match &cli.command {
        Commands::Cards { image, out, layout, jsonl } => {
            commands::cards::run(image, out.as_deref(), layout.as_deref(), *jsonl)
        }
        Commands::Decks { image, out, layout, jsonl } => {
            commands::decks::run(image, out.as_deref(), layout.as_deref(), *jsonl)
        }
        Commands::All { image, out, layout } => commands::all::run(image, out, layout.as_deref()),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {:#}", err);
            ExitCode::FAILURE
        }
    }
}
