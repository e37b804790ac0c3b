use std::io;

use menu_core::MenuError;
use menu_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("menu {0} not found")]
    MenuNotFound(String),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to spawn UI thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("UI thread is no longer running")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, DriverError>;
