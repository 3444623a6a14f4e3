//! Baby routine log CLI library.
//!
//! This crate provides the interactive session on top of `bl-core`.

mod cli;
pub mod commands;
mod config;
pub mod session;

pub use cli::{Cli, HistoryLog, SessionCommand, SessionLine};
pub use config::Config;
pub use session::{Flow, Session};
