//! Configuration section definitions.

mod build;

pub use build::{BuildConfig, ColorMode};
