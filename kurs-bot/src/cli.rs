//! Command line: `kurs-bot run [--token <TOKEN>]`. Everything else comes from env.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kurs-bot")]
#[command(about = "Telegram bot reporting official NBRB exchange rates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
