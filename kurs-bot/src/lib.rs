//! # Exchange-rate bot application
//!
//! Wires the Telegram transport, handler chain, conversation handler and NBRB client.
//! Loads config from env and runs the dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{mask_token, BotConfig};
pub use runner::run_bot;
