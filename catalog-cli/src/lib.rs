//! Terminal frontend for the product catalog backend

pub mod cli;
pub mod commands;
pub mod logger;
pub mod output;

pub use cli::{Cli, Command};
