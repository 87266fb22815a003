//! # CLI Module
//!
//! Command-line front end of the generator.
//!
//! ## Usage
//!
//! ```bash
//! lambdagen target/java
//! lambdagen target/java --package com.example.function --no-throwing
//! lambdagen --dry-run --trace
//! ```
//!
//! Options:
//! - `OUTPUT_DIR` - Directory the package tree is written under
//! - `--config <FILE>` - TOML config (default: `./lambdagen.toml` if present)
//! - `--package <ROOT>` - Root package (default: `io.lambdagen`)
//! - `--no-throwing` - Skip the `Throwable*` twins
//! - `--strict` - Fail on entities no stage recognizes
//! - `--dry-run` - Report what would be generated, write nothing
//! - `--template <FILE>` - Jinja template replacing the built-in layout
//! - `--log-level <LEVEL>` - Override `LAMBDAGEN_LOG_LEVEL`
//! - `--trace` - Print per-stage entity counts
//!
//! Settings are layered: defaults, config file, `LAMBDAGEN_*` environment,
//! then flags.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use lambdagen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli};
