//! Clap derive structures for the `beamlab` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Kept free of workspace crates so `build.rs` can include it directly.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// beamlab -- configure and run wireless link simulations
#[derive(Debug, Parser)]
#[command(
    name = "beamlab",
    version,
    about = "Configure and run Beamforming Lab link simulations",
    long_about = "Command-line client for the Beamforming Lab simulation backend.\n\n\
        Builds a radio link (carrier, power, distance, system generation and\n\
        both antennas), validates it locally, and submits it for simulation.\n\
        Results, range sweeps and 5G / 5G-A / 6G comparisons are fetched\n\
        from the backend.",
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
    /// Backend profile to use
    #[arg(long, short = 'p', env = "BEAMLAB_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Simulation backend URL (overrides profile)
    #[arg(long, short = 'S', env = "BEAMLAB_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "BEAMLAB_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "BEAMLAB_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
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

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Domain value enums ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemArg {
    /// 5G NR, sub-6 GHz
    #[value(name = "5G")]
    FiveG,
    /// 5G-Advanced
    #[value(name = "5G-A", alias = "5G-Advanced")]
    FiveGAdvanced,
    /// 6G
    #[value(name = "6G")]
    SixG,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolarizationArg {
    /// Horizontal
    #[value(name = "H", alias = "horizontal")]
    Horizontal,
    /// Vertical
    #[value(name = "V", alias = "vertical")]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PowerUnitArg {
    #[value(name = "dBm")]
    Dbm,
    #[value(name = "dBW")]
    Dbw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FreqUnitArg {
    #[value(name = "Hz")]
    Hz,
    #[value(name = "kHz")]
    KHz,
    #[value(name = "MHz")]
    MHz,
    #[value(name = "GHz")]
    GHz,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build, inspect and validate a link configuration (offline)
    #[command(alias = "l")]
    Link(LinkArgs),

    /// Validate the link and submit it for simulation
    Run(RunArgs),

    /// Show the latest simulation results
    #[command(alias = "res")]
    Results(ResultsArgs),

    /// Sweep received power and SNR over distance
    Range(RangeArgs),

    /// Compare the link across 5G, 5G-A and 6G
    #[command(alias = "cmp")]
    Compare(CompareArgs),

    /// Check that the simulation backend is reachable
    Health,

    /// Convert between display units (offline)
    Units(UnitsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Link parameters ──────────────────────────────────────────────────

/// Link parameters. Anything not given comes from `[link]` in the config
/// file, then from the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct LinkFlags {
    /// Carrier frequency in MHz (600-7100)
    #[arg(long, value_name = "MHZ", allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Transmit power in dBm (-10 to 46)
    #[arg(long, value_name = "DBM", allow_negative_numbers = true)]
    pub power: Option<f64>,

    /// Link distance in meters (1-5000)
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// System generation
    #[arg(long, value_enum, ignore_case = true)]
    pub system: Option<SystemArg>,

    /// Channel bandwidth in MHz (default depends on --system)
    #[arg(long, value_name = "MHZ", allow_negative_numbers = true)]
    pub bandwidth: Option<f64>,

    /// Transmit antenna gain in dBi
    #[arg(long, value_name = "DBI", allow_negative_numbers = true)]
    pub tx_gain: Option<f64>,

    /// Transmit antenna polarization
    #[arg(long, value_enum, ignore_case = true)]
    pub tx_polarization: Option<PolarizationArg>,

    /// Transmit antenna half-power beamwidth in degrees
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub tx_beamwidth: Option<f64>,

    /// Receive antenna gain in dBi
    #[arg(long, value_name = "DBI", allow_negative_numbers = true)]
    pub rx_gain: Option<f64>,

    /// Receive antenna polarization
    #[arg(long, value_enum, ignore_case = true)]
    pub rx_polarization: Option<PolarizationArg>,

    /// Receive antenna half-power beamwidth in degrees
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub rx_beamwidth: Option<f64>,
}

// ── Link ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[command(subcommand)]
    pub command: LinkCommand,
}

#[derive(Debug, Subcommand)]
pub enum LinkCommand {
    /// Show the resolved link configuration
    Show(LinkFlags),

    /// Check the link against the supported ranges
    Validate(LinkFlags),

    /// Print the request body sent to the backend
    Wire {
        #[command(flatten)]
        link: LinkFlags,

        /// Omit antennas and bandwidth
        #[arg(long)]
        basic: bool,
    },

    /// Show a simulation record summary for the link
    Summary(LinkFlags),
}

// ── Run / Results / Range / Compare ──────────────────────────────────

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub link: LinkFlags,

    /// Fetch and show results after submitting
    #[arg(long)]
    pub fetch: bool,
}

#[derive(Debug, Args)]
pub struct ResultsArgs {
    #[command(flatten)]
    pub units: DisplayUnits,

    /// List the spectrum samples instead of the summary
    #[arg(long)]
    pub spectrum: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DisplayUnits {
    /// Unit for power values
    #[arg(long, value_enum, ignore_case = true, default_value = "dBm")]
    pub power_unit: PowerUnitArg,

    /// Unit for frequency values
    #[arg(long, value_enum, ignore_case = true, default_value = "MHz")]
    pub freq_unit: FreqUnitArg,
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    #[command(flatten)]
    pub link: LinkFlags,

    /// Report the farthest distance that still reaches this SNR (dB)
    #[arg(long, value_name = "DB", allow_negative_numbers = true)]
    pub min_snr: Option<f64>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub link: LinkFlags,
}

// ── Units ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UnitsArgs {
    #[command(subcommand)]
    pub command: UnitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitsCommand {
    /// Convert a power level between dBm and dBW
    Power {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of VALUE
        #[arg(long, value_enum, ignore_case = true, default_value = "dBm")]
        from: PowerUnitArg,
    },

    /// Convert a distance between meters and kilometers
    Distance {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// VALUE is in kilometers
        #[arg(long)]
        km: bool,
    },

    /// Express a frequency in another unit
    Frequency {
        value: f64,

        /// Unit of VALUE
        #[arg(long, value_enum, ignore_case = true, default_value = "Hz")]
        from: FreqUnitArg,

        /// Target unit
        #[arg(long, value_enum, ignore_case = true, default_value = "MHz")]
        to: FreqUnitArg,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Show the effective configuration
    Show,

    /// Set a profile value (server, timeout) or a link default (link.<key>)
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
