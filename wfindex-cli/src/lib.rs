//! Command line host for `wfindex`.
//!
//! Serves a repository checked out on local disk through [`reader::LocalFileReader`]
//! and prints index, validation and metadata reports as text or JSON.

pub mod cli;
pub mod config;
mod logging;
pub mod output;
pub mod reader;
pub mod report;

pub use cli::{Cli, Command, Outcome, execute, run};
pub use config::HostConfig;
pub use reader::LocalFileReader;
