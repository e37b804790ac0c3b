//! Attribute application for containers and items.
//!
//! Keys a variant does not understand are ignored.

use menu_keys::Accelerator;
use tracing::trace;

use crate::node::{ContainerNode, ItemNode};
use crate::role::role_effect;
use crate::toolkit::{MenuToolkit, ToolkitResult};

pub const LABEL: &str = "label";
pub const ROLE: &str = "role";
pub const SEPARATOR: &str = "separator";
pub const KEYS: &str = "keys";

/// Nodes whose state is driven by `(key, value)` attributes.
pub trait Attributes<T: MenuToolkit> {
    fn set_attr(&mut self, toolkit: &mut T, key: &str, value: &str) -> ToolkitResult<()>;

    /// Reset `key` to its default.
    fn del_attr(&mut self, toolkit: &mut T, key: &str) -> ToolkitResult<()>;
}

impl<T: MenuToolkit> Attributes<T> for ContainerNode<T::Handle> {
    fn set_attr(&mut self, toolkit: &mut T, key: &str, value: &str) -> ToolkitResult<()> {
        match key {
            LABEL => toolkit.set_text(self.handle, value),
            _ => {
                trace!(node_id = %self.id, key, "ignoring container attribute");
                Ok(())
            }
        }
    }

    fn del_attr(&mut self, toolkit: &mut T, key: &str) -> ToolkitResult<()> {
        match key {
            LABEL => toolkit.set_text(self.handle, ""),
            _ => Ok(()),
        }
    }
}

impl<T: MenuToolkit> Attributes<T> for ItemNode<T::Handle> {
    fn set_attr(&mut self, toolkit: &mut T, key: &str, value: &str) -> ToolkitResult<()> {
        match key {
            LABEL => toolkit.set_text(self.handle, value),
            ROLE => self.apply_role(toolkit, value),
            SEPARATOR => self.show_separator(toolkit),
            KEYS => self.set_keys(toolkit, value),
            _ => {
                trace!(node_id = %self.id, key, "ignoring item attribute");
                Ok(())
            }
        }
    }

    fn del_attr(&mut self, toolkit: &mut T, key: &str) -> ToolkitResult<()> {
        match key {
            LABEL => toolkit.set_text(self.handle, ""),
            SEPARATOR => self.hide_separator(toolkit),
            KEYS => toolkit.set_accelerator(self.handle, None),
            _ => Ok(()),
        }
    }
}

impl<H: Copy> ItemNode<H> {
    fn apply_role<T: MenuToolkit<Handle = H>>(
        &mut self,
        toolkit: &mut T,
        role: &str,
    ) -> ToolkitResult<()> {
        let effect = role_effect(role);
        if let Some(icon) = effect.icon {
            toolkit.set_icon(self.handle, Some(icon))?;
        }
        if let Some(keys) = effect.keys {
            self.set_keys(toolkit, keys)?;
        }
        if let Some(visible) = effect.visible {
            toolkit.set_visible(self.handle, visible)?;
        }
        Ok(())
    }

    /// Replace the item's accelerator with the parsed description.
    pub fn set_keys<T: MenuToolkit<Handle = H>>(
        &mut self,
        toolkit: &mut T,
        keys: &str,
    ) -> ToolkitResult<()> {
        toolkit.set_accelerator(self.handle, Some(Accelerator::parse(keys)))
    }

    /// Swap the item for a separator, in place when attached.
    fn show_separator<T: MenuToolkit<Handle = H>>(
        &mut self,
        toolkit: &mut T,
    ) -> ToolkitResult<()> {
        if self.separator.is_some() {
            return Ok(());
        }
        let separator = toolkit.create_separator();
        if let Some(parent) = toolkit.parent_of(self.handle)
            && let Err(error) = toolkit.replace_child(parent, self.handle, separator)
        {
            toolkit.release(separator);
            return Err(error);
        }
        self.separator = Some(separator);
        Ok(())
    }

    /// Put the item back where its separator sits and discard the separator.
    fn hide_separator<T: MenuToolkit<Handle = H>>(
        &mut self,
        toolkit: &mut T,
    ) -> ToolkitResult<()> {
        let Some(separator) = self.separator else {
            return Ok(());
        };
        if let Some(parent) = toolkit.parent_of(separator) {
            toolkit.replace_child(parent, separator, self.handle)?;
        }
        toolkit.release(separator);
        self.separator = None;
        Ok(())
    }
}
