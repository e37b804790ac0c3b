//! Node variants of the abstract menu tree.

use std::fmt;

use crate::attributes::Attributes;
use crate::toolkit::MenuToolkit;

/// Stand-in for a sub-tree rendered by a host component.
///
/// Owns no native control; its content is whatever `root_id` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNode {
    pub id: String,
    /// Component name supplied by the host.
    pub name: String,
    pub root_id: Option<String>,
    pub is_root_compo: bool,
}

/// A submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode<H> {
    pub id: String,
    pub compo_id: String,
    pub menu_id: String,
    pub handle: H,
}

/// A leaf entry, optionally displayed as a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode<H> {
    pub id: String,
    pub compo_id: String,
    pub menu_id: String,
    pub handle: H,
    /// Separator substitute; while present it is the active handle.
    pub separator: Option<H>,
}

impl<H: Copy> ItemNode<H> {
    pub fn active_handle(&self) -> H {
        self.separator.unwrap_or(self.handle)
    }

    pub fn is_separator(&self) -> bool {
        self.separator.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Component,
    Container,
    Item,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Component => "component",
            Self::Container => "menu",
            Self::Item => "menuitem",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<H> {
    Component(ComponentNode),
    Container(ContainerNode<H>),
    Item(ItemNode<H>),
}

impl<H: Copy> Node<H> {
    pub fn id(&self) -> &str {
        match self {
            Self::Component(node) => &node.id,
            Self::Container(node) => &node.id,
            Self::Item(node) => &node.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Component(_) => NodeKind::Component,
            Self::Container(_) => NodeKind::Container,
            Self::Item(_) => NodeKind::Item,
        }
    }

    /// The native handle currently standing for this node in its parent.
    pub fn active_handle(&self) -> Option<H> {
        match self {
            Self::Component(_) => None,
            Self::Container(node) => Some(node.handle),
            Self::Item(node) => Some(node.active_handle()),
        }
    }

    /// Every native handle the node owns.
    pub fn handles(&self) -> Vec<H> {
        match self {
            Self::Component(_) => Vec::new(),
            Self::Container(node) => vec![node.handle],
            Self::Item(node) => std::iter::once(node.handle).chain(node.separator).collect(),
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode<H>> {
        match self {
            Self::Container(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemNode<H>> {
        match self {
            Self::Item(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentNode> {
        match self {
            Self::Component(node) => Some(node),
            _ => None,
        }
    }

    /// Attribute access; components carry no attributes.
    pub fn attributes_mut<T>(&mut self) -> Option<&mut dyn Attributes<T>>
    where
        T: MenuToolkit<Handle = H>,
    {
        match self {
            Self::Component(_) => None,
            Self::Container(node) => Some(node),
            Self::Item(node) => Some(node),
        }
    }
}
