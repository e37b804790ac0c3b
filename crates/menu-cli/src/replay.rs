//! Replaying recorded host sessions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use menu_core::{ControlSnapshot, ControlTree};
use menu_driver::{DriverConfig, UiThread};
use menu_model::HostCall;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Continue after a failed call instead of stopping.
    pub keep_going: bool,
}

/// The host-visible result of one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallOutcome {
    pub index: usize,
    pub return_id: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
    pub err: Option<String>,
}

impl CallOutcome {
    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

/// Final state of one menu after the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView {
    pub id: String,
    pub root_id: Option<String>,
    pub nodes: usize,
    #[serde(skip)]
    pub outline: Option<String>,
    pub tree: Option<ControlSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub calls: Vec<CallOutcome>,
    /// Calls not sent because an earlier call failed.
    pub skipped: usize,
    pub menus: Vec<MenuView>,
}

impl ReplayReport {
    pub fn failed(&self) -> usize {
        self.calls.iter().filter(|call| !call.is_ok()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Read a session file: a JSON array of host calls.
pub fn load_session(path: &Path) -> Result<Vec<HostCall>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read session {}", path.display()))?;
    parse_session(&content).with_context(|| format!("invalid session {}", path.display()))
}

pub fn parse_session(content: &str) -> Result<Vec<HostCall>> {
    serde_json::from_str(content).context("expected a JSON array of host calls")
}

/// Send `calls` to a fresh UI thread in order and collect the replies and
/// the resulting menus.
pub fn replay(
    calls: Vec<HostCall>,
    config: DriverConfig,
    options: ReplayOptions,
) -> Result<ReplayReport> {
    let total = calls.len();
    let ui = UiThread::spawn(config, ControlTree::new).context("failed to start UI thread")?;

    let mut outcomes = Vec::with_capacity(total);
    for (index, call) in calls.into_iter().enumerate() {
        let method = call.method.clone();
        let menu_id = call
            .input
            .get("ID")
            .and_then(Value::as_str)
            .map(str::to_string);
        let reply = ui
            .call(call)
            .with_context(|| format!("call {index} did not complete"))?;
        let outcome = CallOutcome {
            index,
            return_id: reply.return_id,
            method,
            menu_id,
            err: reply.err,
        };
        let failed = !outcome.is_ok();
        outcomes.push(outcome);
        if failed && !options.keep_going {
            warn!(index, "stopping replay at failed call");
            break;
        }
    }

    let menus = ui
        .exec(|driver| {
            driver
                .menu_ids()
                .into_iter()
                .filter_map(|id| driver.menu(id))
                .map(|menu| {
                    let root = menu.root().map(|root| root.handle);
                    MenuView {
                        id: menu.id().to_string(),
                        root_id: menu.root_id().map(str::to_string),
                        nodes: menu.nodes().len(),
                        outline: root.map(|handle| driver.toolkit().outline(handle)),
                        tree: root.and_then(|handle| driver.toolkit().snapshot(handle)),
                    }
                })
                .collect::<Vec<_>>()
        })
        .context("failed to inspect menus")?;

    let report = ReplayReport {
        skipped: total - outcomes.len(),
        calls: outcomes,
        menus,
    };
    info!(
        calls = report.calls.len(),
        failed = report.failed(),
        skipped = report.skipped,
        "replay finished"
    );
    Ok(report)
}
