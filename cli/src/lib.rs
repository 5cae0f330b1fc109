//! Command-line front end for reconstructing and producing radix-encoded
//! Shamir share records.

pub mod commands;
pub mod exit;
pub mod logging;

pub use commands::{run, Cli, Command};
pub use exit::Status;
