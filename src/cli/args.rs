//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract component contracts and write the manifest
//! - `show`: Browse a previously written manifest
//! - `init`: Initialize vuepact configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(args)) => args.common.verbose,
            Some(Command::Show(args)) => args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Directory to scan for .vue files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest output path (overrides config file)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also write a Markdown report to this path (overrides config file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with status 1 when any diagnostic is found
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Case-insensitive filter on component name or path
    pub query: Option<String>,

    /// Manifest to read (overrides config file)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Which match to show in full, starting at 1
    #[arg(long, default_value_t = 1)]
    pub select: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract props, emits, slots and diagnostics from .vue components
    Scan(ScanArgs),
    /// List components in a manifest and show one in detail
    Show(ShowArgs),
    /// Initialize a new .vuepactrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
