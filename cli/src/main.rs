mod add_entry;
mod adjust_hrefs;
mod cli;
mod config;
mod error;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::AddEntry(args) => add_entry::execute(args),
        Commands::AdjustHrefs(args) => adjust_hrefs::execute(args),
    };

    if let Err(err) = result {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
