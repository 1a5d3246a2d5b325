//! Command line settlement.
//!
//! - [`Query`] — clap grammar shared by one-shot and interactive use
//! - [`CLI`] — Prompt loop and output rendering
mod cli;
mod query;

pub use cli::*;
pub use query::*;
