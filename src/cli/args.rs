//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--project <path>`: Run against that project directory
//! - `--host <url>`: Override the editor's Remote Control endpoint
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Prefixer - Keep Unreal asset names prefixed by class
#[derive(Parser, Debug)]
#[command(name = "pfx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run against this project directory instead of searching upward
    /// from the current directory
    #[arg(long, global = true, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Override the editor's Remote Control endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply naming-convention prefixes to assets
    #[command(
        name = "apply",
        long_about = "Apply naming-convention prefixes to assets.\n\n\
            Looks up each asset's class in the project's NamingConventions.csv and \
            renames the asset so its name starts with the mapped prefix. Assets whose \
            class has no mapping, whose name already carries the prefix, or whose \
            class is excluded by skip_classes are left alone.\n\n\
            Renames go through the editor's Remote Control API, so the Unreal editor \
            must be running with the Remote Control plugin enabled.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Prefix two specific assets
    pfx apply /Game/Props/Door /Game/Props/Window

    # Prefix everything under a content root
    pfx apply --all /Game

    # Preview without touching the editor
    pfx apply --all /Game --dry-run"
    )]
    Apply {
        /// Object paths of assets to prefix (e.g. /Game/Props/Door)
        #[arg(value_name = "ASSET", required_unless_present = "all")]
        paths: Vec<String>,

        /// Prefix every asset under this content root instead
        #[arg(long, value_name = "ROOT", conflicts_with = "paths")]
        all: Option<String>,

        /// Show what would be renamed without renaming anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove naming-convention prefixes from assets
    #[command(
        name = "undo",
        long_about = "Remove naming-convention prefixes from assets.\n\n\
            The inverse of apply: strips the prefix mapped to each asset's class from \
            the front of its name. Assets that do not carry the mapped prefix, or whose \
            class has no mapping, are left alone. Only the configured prefix is removed, \
            never a longer match.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Undo a single rename
    pfx undo /Game/Props/BP_Door

    # Strip prefixes under a content root, previewing first
    pfx undo --all /Game --dry-run
    pfx undo --all /Game"
    )]
    Undo {
        /// Object paths of assets to strip (e.g. /Game/Props/BP_Door)
        #[arg(value_name = "ASSET", required_unless_present = "all")]
        paths: Vec<String>,

        /// Strip every asset under this content root instead
        #[arg(long, value_name = "ROOT", conflicts_with = "paths")]
        all: Option<String>,

        /// Show what would be renamed without renaming anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Watch a content root and prefix assets as they appear
    #[command(
        name = "watch",
        long_about = "Watch a content root and prefix assets as they appear.\n\n\
            Polls the editor for new assets under the root and applies the configured \
            prefix to each one as it shows up. The first poll only records what already \
            exists; nothing is renamed until an asset is added afterwards. Renames \
            performed by the watcher never trigger it again.\n\n\
            Runs until interrupted with Ctrl-C.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Watch the main content root
    pfx watch /Game

    # Poll more often while importing a large batch
    pfx watch /Game --interval 1"
    )]
    Watch {
        /// Content root to watch (e.g. /Game)
        #[arg(value_name = "ROOT")]
        root: String,

        /// Seconds between polls
        #[arg(long, value_name = "SECONDS", default_value_t = 2)]
        interval: u64,
    },

    /// Show the project's naming conventions
    #[command(
        name = "conventions",
        long_about = "Show the class-to-prefix table loaded from the project's \
            NamingConventions.csv.\n\n\
            Also reports any lines the loader skipped, which is the quickest way to \
            debug a convention that is not taking effect.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all mappings
    pfx conventions"
    )]
    Conventions,

    /// Show the classes of assets as the editor reports them
    #[command(
        name = "classes",
        long_about = "Show the class the editor reports for each asset.\n\n\
            Convention lookups match on this exact class name, so when a prefix is \
            not being applied, compare this output against NamingConventions.csv.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Check one asset
    pfx classes /Game/Props/Door

    # Survey a content root
    pfx classes --all /Game"
    )]
    Classes {
        /// Object paths of assets to inspect
        #[arg(value_name = "ASSET", required_unless_present = "all")]
        paths: Vec<String>,

        /// Inspect every asset under this content root instead
        #[arg(long, value_name = "ROOT", conflicts_with = "paths")]
        all: Option<String>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for pfx.\n\n\
            Writes the completion script to stdout. Redirect it to the location your \
            shell loads completions from.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash
    pfx completion bash > /etc/bash_completion.d/pfx

    # Zsh
    pfx completion zsh > \"${fpath[1]}/_pfx\"

    # Fish
    pfx completion fish > ~/.config/fish/completions/pfx.fish

    # PowerShell
    pfx completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
