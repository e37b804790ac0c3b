use menu_model::ModelError;
use thiserror::Error;

use crate::toolkit::ToolkitError;

/// Errors that abort a render batch.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("{0} change is not supported")]
    UnsupportedChange(i64),

    #[error("{action} change is missing the {field} field")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    #[error("menu does not support {0} tag")]
    UnsupportedNodeType(String),

    #[error("node {0} not found")]
    NodeNotFound(String),

    #[error("node {0} is not a menu container")]
    NotAContainer(String),

    #[error("node {0} does not accept attributes")]
    NoAttributes(String),

    #[error("child {child} of {parent} does not resolve to a menu node")]
    UnresolvedChild { parent: String, child: String },

    #[error("component chain at {0} does not terminate")]
    CycleDetected(String),

    #[error(transparent)]
    Model(ModelError),

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),
}

impl From<ModelError> for MenuError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::UnsupportedChange(tag) => Self::UnsupportedChange(tag),
            ModelError::MissingField { action, field } => Self::MissingField { action, field },
            other => Self::Model(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
