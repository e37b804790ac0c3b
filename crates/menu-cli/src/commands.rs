use std::path::Path;

use anyhow::{Context, Result};
use menu_cli::replay::{ReplayOptions, ReplayReport, load_session, replay};
use menu_cli::summary::{keys_table, print_report};
use menu_driver::DriverConfig;

use crate::cli::{KeysArgs, OutputArg, ReplayArgs};

pub fn load_config(path: Option<&Path>) -> Result<DriverConfig> {
    match path {
        Some(path) => DriverConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(DriverConfig::default()),
    }
}

pub fn run_replay(args: &ReplayArgs, config: DriverConfig) -> Result<ReplayReport> {
    let calls = load_session(&args.session)?;
    let options = ReplayOptions {
        keep_going: args.keep_going,
    };
    let report = replay(calls, config, options)?;
    match args.output {
        OutputArg::Tree => print_report(&report),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{json}");
        }
    }
    Ok(report)
}

pub fn run_keys(args: &KeysArgs) {
    println!("{}", keys_table(&args.specs));
}
