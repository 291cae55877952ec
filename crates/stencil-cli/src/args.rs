//! Command-line argument definitions for the stencil CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which figures to generate, where the
//! output goes, configuration file selection, and logging verbosity.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the stencil figure generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// The available subcommands.
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Render report figures
    Render {
        /// Figure ids to render; renders every figure when omitted
        figures: Vec<String>,

        /// Directory receiving the generated images
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// List the available figures
    List,

    /// Download technology logos for the architecture figure
    Logos {
        /// Destination directory for the logo files
        #[arg(long, default_value = "assets/logos")]
        dest: PathBuf,
    },
}
