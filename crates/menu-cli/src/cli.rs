//! CLI argument definitions for the menu session replayer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "menu-replay",
    version,
    about = "Replay recorded menu sessions against the reconciliation engine",
    long_about = "Replay a recorded sequence of host menu calls (menus.New, menus.Load,\n\
                  menus.Render, menus.Delete) and print the replies together with the\n\
                  native menu tree each menu ends up with."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Driver configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Omit span close events from JSON logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a session file and print the resulting menus.
    Replay(ReplayArgs),

    /// Show how accelerator descriptions are parsed.
    Keys(KeysArgs),
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// JSON array of host calls.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,

    /// How to print the result.
    #[arg(long = "output", value_enum, default_value = "tree")]
    pub output: OutputArg,

    /// Keep replaying after a failed call.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

#[derive(Parser)]
pub struct KeysArgs {
    /// Accelerator descriptions such as `cmdorctrl+shift+x`.
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Tree,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
