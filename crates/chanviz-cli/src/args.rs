//! Command-line argument definitions for the Chanviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input channel, the output
//! destination, configuration file selection, and logging verbosity.

use clap::Parser;

/// Render the upgrade graph of an update channel as a Mermaid diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the channel YAML file, or `-` for standard input
    #[arg(help = "Path to the channel file (`-` reads stdin)")]
    pub input: String,

    /// Path to write the diagram to; standard output if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
