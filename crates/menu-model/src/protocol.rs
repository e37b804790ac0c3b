//! Host call envelopes.
//!
//! The host addresses a menu instance by id and tags every call with a
//! correlation id (`ReturnID`). The reply carries the same correlation id and
//! either a null error (success) or a human-readable error message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::change::{Change, parse_changes};
use crate::{ModelError, Result};

pub const METHOD_NEW: &str = "menus.New";
pub const METHOD_LOAD: &str = "menus.Load";
pub const METHOD_RENDER: &str = "menus.Render";
pub const METHOD_DELETE: &str = "menus.Delete";

/// A call as received from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCall {
    #[serde(rename = "ReturnID")]
    pub return_id: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "Input", default)]
    pub input: Value,
}

/// The reply delivered back to the host for one [`HostCall`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReturn {
    #[serde(rename = "ReturnID")]
    pub return_id: String,
    #[serde(rename = "Err")]
    pub err: Option<String>,
}

impl HostReturn {
    pub fn ok(return_id: impl Into<String>) -> Self {
        Self {
            return_id: return_id.into(),
            err: None,
        }
    }

    pub fn error(return_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            return_id: return_id.into(),
            err: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

/// A decoded menu call.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCall {
    New { id: String },
    Load { id: String },
    Render { id: String, changes: Vec<Change> },
    Delete { id: String },
}

impl MenuCall {
    pub fn menu_id(&self) -> &str {
        match self {
            Self::New { id } | Self::Load { id } | Self::Render { id, .. } | Self::Delete { id } => {
                id
            }
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::New { .. } => METHOD_NEW,
            Self::Load { .. } => METHOD_LOAD,
            Self::Render { .. } => METHOD_RENDER,
            Self::Delete { .. } => METHOD_DELETE,
        }
    }
}

#[derive(Deserialize)]
struct MenuRef {
    #[serde(rename = "ID")]
    id: String,
}

/// `Changes` arrives JSON-encoded inside a string; inline arrays are accepted
/// as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChangesPayload {
    Encoded(String),
    Inline(Vec<Change>),
}

#[derive(Deserialize)]
struct RenderInput {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Changes")]
    changes: ChangesPayload,
}

impl HostCall {
    pub fn new(return_id: impl Into<String>, method: impl Into<String>, input: Value) -> Self {
        Self {
            return_id: return_id.into(),
            method: method.into(),
            input,
        }
    }

    /// Build a `menus.Render` call carrying the changes in their encoded form.
    pub fn render(
        return_id: impl Into<String>,
        menu_id: impl Into<String>,
        changes: &[Change],
    ) -> Result<Self> {
        let encoded = serde_json::to_string(changes).map_err(ModelError::InvalidChanges)?;
        Ok(Self::new(
            return_id,
            METHOD_RENDER,
            serde_json::json!({ "ID": menu_id.into(), "Changes": encoded }),
        ))
    }

    pub fn decode(&self) -> Result<MenuCall> {
        match self.method.as_str() {
            METHOD_NEW => Ok(MenuCall::New {
                id: self.menu_ref()?.id,
            }),
            METHOD_LOAD => Ok(MenuCall::Load {
                id: self.menu_ref()?.id,
            }),
            METHOD_DELETE => Ok(MenuCall::Delete {
                id: self.menu_ref()?.id,
            }),
            METHOD_RENDER => {
                let input: RenderInput = self.parse_input()?;
                let changes = match input.changes {
                    ChangesPayload::Encoded(json) => parse_changes(&json)?,
                    ChangesPayload::Inline(changes) => changes,
                };
                Ok(MenuCall::Render {
                    id: input.id,
                    changes,
                })
            }
            other => Err(ModelError::UnknownMethod(other.to_string())),
        }
    }

    fn menu_ref(&self) -> Result<MenuRef> {
        self.parse_input()
    }

    fn parse_input<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.input).map_err(|source| ModelError::InvalidInput {
            method: self.method.clone(),
            source,
        })
    }
}
