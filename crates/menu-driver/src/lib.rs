//! Host-facing side of the menu engine.
//!
//! [`MenuDriver`] keeps every menu instance keyed by id and answers host
//! calls (`menus.New`, `menus.Load`, `menus.Render`, `menus.Delete`) with a
//! reply carrying the call's return id. [`UiThread`] runs a driver on the
//! thread that owns the native toolkit.

pub mod config;
pub mod driver;
pub mod error;
pub mod ui_thread;

pub use config::{ConfigError, DriverConfig};
pub use driver::MenuDriver;
pub use error::{DriverError, Result};
pub use ui_thread::UiThread;
