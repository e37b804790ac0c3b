//! Incremental reconciliation of declarative menu trees onto native controls.
//!
//! A host renders its menu as an abstract tree and ships the difference
//! between renders as a list of [`Change`](menu_model::Change)s. A [`Menu`]
//! keeps the abstract nodes and replays each change against a
//! [`MenuToolkit`], so only the native controls that actually changed are
//! touched.
//!
//! # Example
//!
//! ```
//! use menu_core::{ControlTree, Menu};
//! use menu_model::Change;
//!
//! let mut tree = ControlTree::new();
//! let mut menu = Menu::new("m1");
//! menu.render(
//!     &mut tree,
//!     &[
//!         Change::new_node("root", "menu"),
//!         Change::new_node("copy", "menuitem"),
//!         Change::set_attr("root", "label", "Edit"),
//!         Change::set_attr("copy", "label", "Copy"),
//!         Change::set_attr("copy", "role", "copy"),
//!         Change::append_child("root", "copy"),
//!         Change::set_root("root"),
//!     ],
//! )
//! .unwrap();
//!
//! let root = menu.root().unwrap();
//! assert_eq!(tree.outline(root.handle), "Edit >\n  Copy [Copy] (Ctrl+C)\n");
//! ```

pub mod attributes;
pub mod control_tree;
pub mod error;
pub mod menu;
pub mod node;
mod reconcile;
pub mod registry;
pub mod role;
pub mod toolkit;

pub use attributes::Attributes;
pub use control_tree::{ControlId, ControlKind, ControlSnapshot, ControlTree};
pub use error::{MenuError, Result};
pub use menu::{Menu, MenuOptions};
pub use node::{ComponentNode, ContainerNode, ItemNode, Node, NodeKind};
pub use reconcile::{TYPE_MENU, TYPE_MENU_ITEM};
pub use registry::NodeRegistry;
pub use role::{RoleEffect, role_effect};
pub use toolkit::{MenuToolkit, Symbol, ToolkitError, ToolkitResult};
