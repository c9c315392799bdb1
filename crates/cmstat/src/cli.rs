//! Clap derive structures for the `cmstat` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cmstat -- read cable modem status from the command line
#[derive(Debug, Parser)]
#[command(
    name = "cmstat",
    version,
    about = "Read signal and device status from a cable modem",
    long_about = "Scrapes the status pages a DOCSIS cable modem serves on its LAN\n\
        address and prints device identity, uptime and per-channel\n\
        upstream/downstream signal statistics.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Modem profile to use
    #[arg(long, short = 'p', env = "CMSTAT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Modem host or base URL (overrides profile) [default: 192.168.100.1]
    #[arg(long, short = 'H', env = "CMSTAT_HOST", global = true)]
    pub host: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "CMSTAT_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "CMSTAT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show device identity, addresses and uptime
    #[command(alias = "i")]
    Info,

    /// Show upstream and downstream channel signal levels
    #[command(alias = "c")]
    Channels(ChannelsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Channels ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ChannelsArgs {
    /// Only show one direction
    #[arg(long, short = 'd', value_enum)]
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Modem to headend
    Upstream,
    /// Headend to modem
    Downstream,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Create or update a profile's modem host
    SetHost {
        /// Profile name
        profile: String,

        /// Host, host:port, or base URL of the modem
        host: String,
    },

    /// Set the default profile
    Use {
        /// Profile name to make default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
