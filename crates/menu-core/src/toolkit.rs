//! Seam between the reconciler and the native menu toolkit.
//!
//! The reconciler never touches native controls directly; it drives them
//! through [`MenuToolkit`]. [`ControlTree`](crate::ControlTree) is the
//! in-process implementation.

use std::fmt;
use std::hash::Hash;

use menu_keys::Accelerator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Icon glyphs a menu item can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Delete,
    Refresh,
    FullScreen,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("unknown control {handle}")]
    UnknownControl { handle: String },

    #[error("control {handle} cannot hold children")]
    NotASubmenu { handle: String },

    #[error("control {child} already has a parent")]
    AlreadyParented { child: String },

    #[error("control {child} is not a child of {parent}")]
    NotAChild { parent: String, child: String },

    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: String, child: String },

    #[error("index {index} is out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("control {handle} does not support {property}")]
    Unsupported {
        handle: String,
        property: &'static str,
    },
}

impl ToolkitError {
    pub(crate) fn unknown(handle: impl fmt::Debug) -> Self {
        Self::UnknownControl {
            handle: format!("{handle:?}"),
        }
    }
}

pub type ToolkitResult<T> = std::result::Result<T, ToolkitError>;

/// Operations the reconciler needs from a native menu toolkit.
///
/// Handles are cheap identifiers of native controls. A control holds at most
/// one parent; only submenus hold children, in order.
pub trait MenuToolkit {
    type Handle: Copy + Eq + Hash + fmt::Debug;

    fn create_submenu(&mut self) -> Self::Handle;
    fn create_item(&mut self) -> Self::Handle;
    fn create_separator(&mut self) -> Self::Handle;

    /// Destroy a control, detaching it from its parent first. Releasing an
    /// unknown handle is a no-op.
    fn release(&mut self, handle: Self::Handle);

    fn set_text(&mut self, handle: Self::Handle, text: &str) -> ToolkitResult<()>;
    fn set_font_size(&mut self, handle: Self::Handle, size: f32) -> ToolkitResult<()>;
    fn set_icon(&mut self, handle: Self::Handle, icon: Option<Symbol>) -> ToolkitResult<()>;
    fn set_visible(&mut self, handle: Self::Handle, visible: bool) -> ToolkitResult<()>;

    /// Replace the control's accelerator; `None` clears it.
    fn set_accelerator(
        &mut self,
        handle: Self::Handle,
        accelerator: Option<Accelerator>,
    ) -> ToolkitResult<()>;

    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> ToolkitResult<()>;
    fn insert_child(
        &mut self,
        parent: Self::Handle,
        index: usize,
        child: Self::Handle,
    ) -> ToolkitResult<()>;
    fn remove_child(&mut self, parent: Self::Handle, child: Self::Handle) -> ToolkitResult<()>;

    fn parent_of(&self, handle: Self::Handle) -> Option<Self::Handle>;
    fn index_of(&self, parent: Self::Handle, child: Self::Handle) -> Option<usize>;
    fn children(&self, parent: Self::Handle) -> Vec<Self::Handle>;

    /// Put `new` where `old` sits under `parent` and detach `old`.
    fn replace_child(
        &mut self,
        parent: Self::Handle,
        old: Self::Handle,
        new: Self::Handle,
    ) -> ToolkitResult<()> {
        let index = self
            .index_of(parent, old)
            .ok_or_else(|| ToolkitError::NotAChild {
                parent: format!("{parent:?}"),
                child: format!("{old:?}"),
            })?;
        self.insert_child(parent, index, new)?;
        self.remove_child(parent, old)
    }
}
