//! Command-line front end for the querysample engine.
//!
//! Reads a table description (and optionally query options) from a TOML file,
//! applies command-line overrides and prints the resulting sample query.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod args;
mod request;

pub use args::Cli;
pub use request::{SampleRequest, render};
