//! In-process native control graph.
//!
//! Controls live in an arena addressed by [`ControlId`]. Released slots are
//! reused, but each reuse bumps the slot generation, so a stale handle reports
//! [`ToolkitError::UnknownControl`] instead of aliasing the newer control.

use std::fmt::{self, Write as _};

use menu_keys::Accelerator;
use serde::Serialize;

use crate::toolkit::{MenuToolkit, Symbol, ToolkitError, ToolkitResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId {
    index: u32,
    generation: u32,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}v{}", self.index, self.generation)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Submenu,
    Item,
    Separator,
}

#[derive(Debug, Clone)]
struct Control {
    kind: ControlKind,
    text: String,
    font_size: Option<f32>,
    icon: Option<Symbol>,
    visible: bool,
    accelerator: Option<Accelerator>,
    parent: Option<ControlId>,
    children: Vec<ControlId>,
}

impl Control {
    fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            text: String::new(),
            font_size: None,
            icon: None,
            visible: true,
            accelerator: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Serializable view of a control and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSnapshot {
    pub kind: ControlKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Symbol>,
    #[serde(skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ControlSnapshot>,
}

fn is_true(value: &bool) -> bool {
    *value
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    control: Option<Control>,
}

#[derive(Debug, Default)]
pub struct ControlTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live controls.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots ever allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.get(id).is_some()
    }

    pub fn kind(&self, id: ControlId) -> Option<ControlKind> {
        self.get(id).map(|control| control.kind)
    }

    pub fn text(&self, id: ControlId) -> Option<&str> {
        self.get(id).map(|control| control.text.as_str())
    }

    pub fn font_size(&self, id: ControlId) -> Option<f32> {
        self.get(id).and_then(|control| control.font_size)
    }

    pub fn icon(&self, id: ControlId) -> Option<Symbol> {
        self.get(id).and_then(|control| control.icon)
    }

    pub fn is_visible(&self, id: ControlId) -> Option<bool> {
        self.get(id).map(|control| control.visible)
    }

    pub fn accelerator(&self, id: ControlId) -> Option<Accelerator> {
        self.get(id).and_then(|control| control.accelerator)
    }

    pub fn snapshot(&self, id: ControlId) -> Option<ControlSnapshot> {
        let control = self.get(id)?;
        Some(ControlSnapshot {
            kind: control.kind,
            text: control.text.clone(),
            icon: control.icon,
            visible: control.visible,
            accelerator: control.accelerator.map(|acc| acc.to_string()),
            children: control
                .children
                .iter()
                .filter_map(|child| self.snapshot(*child))
                .collect(),
        })
    }

    /// Indented, human-readable rendering of a control subtree.
    pub fn outline(&self, id: ControlId) -> String {
        let mut out = String::new();
        self.write_outline(id, 0, &mut out);
        out
    }

    fn write_outline(&self, id: ControlId, depth: usize, out: &mut String) {
        let Some(control) = self.get(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        let _ = match control.kind {
            ControlKind::Separator => writeln!(out, "{indent}----"),
            ControlKind::Submenu => writeln!(out, "{indent}{} >", control.text),
            ControlKind::Item => {
                let mut line = format!("{indent}{}", control.text);
                if let Some(icon) = control.icon {
                    let _ = write!(line, " [{icon:?}]");
                }
                if let Some(acc) = control.accelerator {
                    let _ = write!(line, " ({acc})");
                }
                if !control.visible {
                    line.push_str(" (hidden)");
                }
                writeln!(out, "{line}")
            }
        };
        for child in &control.children {
            self.write_outline(*child, depth + 1, out);
        }
    }

    fn get(&self, id: ControlId) -> Option<&Control> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.control.as_ref())
    }

    fn get_mut(&mut self, id: ControlId) -> ToolkitResult<&mut Control> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.control.as_mut())
            .ok_or_else(|| ToolkitError::unknown(id))
    }

    fn create(&mut self, kind: ControlKind) -> ControlId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.control = Some(Control::new(kind));
            return ControlId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            control: Some(Control::new(kind)),
        });
        ControlId {
            index,
            generation: 0,
        }
    }

    fn content_control(
        &mut self,
        id: ControlId,
        property: &'static str,
    ) -> ToolkitResult<&mut Control> {
        let control = self.get_mut(id)?;
        if control.kind == ControlKind::Separator {
            return Err(ToolkitError::Unsupported {
                handle: id.to_string(),
                property,
            });
        }
        Ok(control)
    }

    /// Validate that `child` may be attached under `parent`.
    fn check_attach(&self, parent: ControlId, child: ControlId) -> ToolkitResult<()> {
        let parent_control = self
            .get(parent)
            .ok_or_else(|| ToolkitError::unknown(parent))?;
        if parent_control.kind != ControlKind::Submenu {
            return Err(ToolkitError::NotASubmenu {
                handle: parent.to_string(),
            });
        }
        let child_control = self.get(child).ok_or_else(|| ToolkitError::unknown(child))?;
        if child_control.parent.is_some() {
            return Err(ToolkitError::AlreadyParented {
                child: child.to_string(),
            });
        }
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(ToolkitError::WouldCycle {
                    parent: parent.to_string(),
                    child: child.to_string(),
                });
            }
            cursor = self.get(current).and_then(|control| control.parent);
        }
        Ok(())
    }
}

impl MenuToolkit for ControlTree {
    type Handle = ControlId;

    fn create_submenu(&mut self) -> ControlId {
        self.create(ControlKind::Submenu)
    }

    fn create_item(&mut self) -> ControlId {
        self.create(ControlKind::Item)
    }

    fn create_separator(&mut self) -> ControlId {
        self.create(ControlKind::Separator)
    }

    fn release(&mut self, handle: ControlId) {
        let Some(control) = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.control.take())
        else {
            return;
        };
        self.free.push(handle.index);
        if let Some(parent) = control.parent
            && let Ok(parent) = self.get_mut(parent)
        {
            parent.children.retain(|child| *child != handle);
        }
        // Children survive their submenu and may be attached elsewhere.
        for child in control.children {
            if let Ok(child) = self.get_mut(child) {
                child.parent = None;
            }
        }
    }

    fn set_text(&mut self, handle: ControlId, text: &str) -> ToolkitResult<()> {
        self.content_control(handle, "text")?.text = text.to_string();
        Ok(())
    }

    fn set_font_size(&mut self, handle: ControlId, size: f32) -> ToolkitResult<()> {
        self.content_control(handle, "font size")?.font_size = Some(size);
        Ok(())
    }

    fn set_icon(&mut self, handle: ControlId, icon: Option<Symbol>) -> ToolkitResult<()> {
        self.content_control(handle, "icon")?.icon = icon;
        Ok(())
    }

    fn set_visible(&mut self, handle: ControlId, visible: bool) -> ToolkitResult<()> {
        self.get_mut(handle)?.visible = visible;
        Ok(())
    }

    fn set_accelerator(
        &mut self,
        handle: ControlId,
        accelerator: Option<Accelerator>,
    ) -> ToolkitResult<()> {
        self.content_control(handle, "accelerator")?.accelerator = accelerator;
        Ok(())
    }

    fn append_child(&mut self, parent: ControlId, child: ControlId) -> ToolkitResult<()> {
        let len = self.get(parent).map_or(0, |control| control.children.len());
        self.insert_child(parent, len, child)
    }

    fn insert_child(
        &mut self,
        parent: ControlId,
        index: usize,
        child: ControlId,
    ) -> ToolkitResult<()> {
        self.check_attach(parent, child)?;
        let children = &mut self.get_mut(parent)?.children;
        if index > children.len() {
            return Err(ToolkitError::IndexOutOfRange {
                index,
                len: children.len(),
            });
        }
        children.insert(index, child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_child(&mut self, parent: ControlId, child: ControlId) -> ToolkitResult<()> {
        let children = &mut self.get_mut(parent)?.children;
        let Some(index) = children.iter().position(|id| *id == child) else {
            return Err(ToolkitError::NotAChild {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        };
        children.remove(index);
        self.get_mut(child)?.parent = None;
        Ok(())
    }

    fn parent_of(&self, handle: ControlId) -> Option<ControlId> {
        self.get(handle).and_then(|control| control.parent)
    }

    fn index_of(&self, parent: ControlId, child: ControlId) -> Option<usize> {
        self.get(parent)?.children.iter().position(|id| *id == child)
    }

    fn children(&self, parent: ControlId) -> Vec<ControlId> {
        self.get(parent)
            .map(|control| control.children.clone())
            .unwrap_or_default()
    }
}
