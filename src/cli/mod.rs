//! Command-line interface module.

mod args;
pub mod build;
pub mod extract;

pub use args::{BuildArgs, Cli, Commands, ExtractArgs};
