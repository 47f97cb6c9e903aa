mod commands;
pub mod setup;

pub use commands::{Cli, OutputFormat};
