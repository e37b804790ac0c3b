//! Menu store and host call dispatch.

use std::collections::HashMap;

use menu_core::{Menu, MenuToolkit};
use menu_model::{Change, HostCall, HostReturn, MenuCall};
use tracing::{debug, info, info_span, warn};

use crate::config::DriverConfig;
use crate::error::{DriverError, Result};

/// Owns a toolkit and every menu rendered into it.
///
/// All calls must come from the thread that owns the toolkit; see
/// [`UiThread`](crate::UiThread) for running a driver on a dedicated thread.
pub struct MenuDriver<T: MenuToolkit> {
    toolkit: T,
    menus: HashMap<String, Menu<T::Handle>>,
    config: DriverConfig,
}

impl<T: MenuToolkit> MenuDriver<T> {
    pub fn new(toolkit: T, config: DriverConfig) -> Self {
        Self {
            toolkit,
            menus: HashMap::new(),
            config,
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn menu(&self, id: &str) -> Option<&Menu<T::Handle>> {
        self.menus.get(id)
    }

    /// Menu ids in sorted order.
    pub fn menu_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.menus.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Create an empty menu. An existing menu with the same id is released
    /// and replaced.
    pub fn new_menu(&mut self, id: &str) {
        let menu = Menu::with_options(id, self.config.menu_options());
        if let Some(mut previous) = self.menus.insert(id.to_string(), menu) {
            warn!(menu_id = id, "replacing existing menu");
            previous.release(&mut self.toolkit);
        }
        debug!(menu_id = id, "menu created");
    }

    pub fn load_menu(&mut self, id: &str) -> Result<()> {
        self.require_mut(id)?.load();
        debug!(menu_id = id, "menu loaded");
        Ok(())
    }

    pub fn render(&mut self, id: &str, changes: &[Change]) -> Result<()> {
        let menu = self
            .menus
            .get_mut(id)
            .ok_or_else(|| DriverError::MenuNotFound(id.to_string()))?;
        menu.render(&mut self.toolkit, changes)?;
        Ok(())
    }

    /// Drop a menu and release its native controls.
    pub fn delete_menu(&mut self, id: &str) -> Result<()> {
        let mut menu = self
            .menus
            .remove(id)
            .ok_or_else(|| DriverError::MenuNotFound(id.to_string()))?;
        menu.release(&mut self.toolkit);
        debug!(menu_id = id, "menu deleted");
        Ok(())
    }

    pub fn dispatch(&mut self, call: MenuCall) -> Result<()> {
        match call {
            MenuCall::New { id } => {
                self.new_menu(&id);
                Ok(())
            }
            MenuCall::Load { id } => self.load_menu(&id),
            MenuCall::Render { id, changes } => self.render(&id, &changes),
            MenuCall::Delete { id } => self.delete_menu(&id),
        }
    }

    /// Decode and run one host call, producing the reply for the host.
    pub fn handle_call(&mut self, call: &HostCall) -> HostReturn {
        let span = info_span!("host_call", return_id = %call.return_id, method = %call.method);
        let _guard = span.enter();

        let outcome = call
            .decode()
            .map_err(DriverError::from)
            .and_then(|menu_call| self.dispatch(menu_call));
        match outcome {
            Ok(()) => HostReturn::ok(call.return_id.as_str()),
            Err(err) => {
                warn!(error = %err, "host call failed");
                HostReturn::error(call.return_id.as_str(), err.to_string())
            }
        }
    }

    /// Release every menu.
    pub fn shutdown(&mut self) {
        let count = self.menus.len();
        for (_, mut menu) in self.menus.drain() {
            menu.release(&mut self.toolkit);
        }
        info!(menus = count, "driver shut down");
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Menu<T::Handle>> {
        self.menus
            .get_mut(id)
            .ok_or_else(|| DriverError::MenuNotFound(id.to_string()))
    }
}
