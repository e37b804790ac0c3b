//! Menu session replayer.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use menu_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_config, run_keys, run_replay};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Replay(args) => {
            match load_config(cli.config.as_deref()).and_then(|config| run_replay(args, config)) {
                Ok(report) => i32::from(report.has_failures()),
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Keys(args) => {
            run_keys(args);
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_timestamps)
        .with_spans(!cli.no_log_spans);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "menu-replay",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-timestamps",
            "--no-log-spans",
            "--color",
            "never",
            "keys",
            "ctrl+c",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.with_timestamps);
        assert!(!config.with_spans);
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let cli = Cli::try_parse_from(["menu-replay", "keys", "f5"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_timestamps);
        assert!(config.with_spans);
    }
}
