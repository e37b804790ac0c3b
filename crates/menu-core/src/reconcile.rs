//! Mutation dispatch.
//!
//! Validation failures leave the menu untouched. Toolkit failures surface
//! where they happen.

use std::fmt;

use menu_model::Mutation;
use tracing::{debug, warn};

use crate::error::{MenuError, Result};
use crate::menu::Menu;
use crate::node::{ComponentNode, ContainerNode, ItemNode, Node};
use crate::toolkit::MenuToolkit;

pub const TYPE_MENU: &str = "menu";
pub const TYPE_MENU_ITEM: &str = "menuitem";

pub(crate) fn apply<T>(
    menu: &mut Menu<T::Handle>,
    toolkit: &mut T,
    mutation: Mutation,
) -> Result<()>
where
    T: MenuToolkit,
{
    debug!(
        menu_id = %menu.id(),
        action = mutation.action().name(),
        node_id = mutation.node_id(),
        "apply"
    );
    match mutation {
        Mutation::SetRoot { node_id } => set_root(menu, &node_id),
        Mutation::NewNode {
            node_id,
            compo_id,
            node_type,
            is_compo,
        } => new_node(menu, toolkit, node_id, compo_id, &node_type, is_compo),
        Mutation::DelNode { node_id } => del_node(menu, toolkit, &node_id),
        Mutation::SetAttr {
            node_id,
            key,
            value,
        } => {
            let node = menu.nodes.require_mut(&node_id)?;
            let attrs = node
                .attributes_mut::<T>()
                .ok_or_else(|| MenuError::NoAttributes(node_id.clone()))?;
            attrs.set_attr(toolkit, &key, &value)?;
            Ok(())
        }
        Mutation::DelAttr { node_id, key } => {
            let node = menu.nodes.require_mut(&node_id)?;
            let attrs = node
                .attributes_mut::<T>()
                .ok_or_else(|| MenuError::NoAttributes(node_id.clone()))?;
            attrs.del_attr(toolkit, &key)?;
            Ok(())
        }
        Mutation::AppendChild { node_id, child_id } => {
            append_child(menu, toolkit, &node_id, child_id)
        }
    }
}

fn set_root<H>(menu: &mut Menu<H>, node_id: &str) -> Result<()>
where
    H: Copy + Eq + fmt::Debug,
{
    let compo_id = match menu.nodes.require(node_id)? {
        Node::Container(container) => container.compo_id.clone(),
        _ => return Err(MenuError::NotAContainer(node_id.to_string())),
    };
    for node in menu.nodes.iter_mut() {
        if let Node::Component(component) = node {
            component.is_root_compo = !compo_id.is_empty() && component.id == compo_id;
        }
    }
    menu.root = Some(node_id.to_string());
    Ok(())
}

fn new_node<T: MenuToolkit>(
    menu: &mut Menu<T::Handle>,
    toolkit: &mut T,
    node_id: String,
    compo_id: String,
    node_type: &str,
    is_compo: bool,
) -> Result<()> {
    let node = if is_compo {
        Node::Component(ComponentNode {
            id: node_id,
            name: node_type.to_string(),
            root_id: None,
            is_root_compo: false,
        })
    } else {
        let handle = match node_type {
            TYPE_MENU => toolkit.create_submenu(),
            TYPE_MENU_ITEM => toolkit.create_item(),
            other => return Err(MenuError::UnsupportedNodeType(other.to_string())),
        };
        if let Err(err) = toolkit.set_font_size(handle, menu.options.font_size) {
            toolkit.release(handle);
            return Err(err.into());
        }
        let menu_id = menu.id().to_string();
        if node_type == TYPE_MENU {
            Node::Container(ContainerNode {
                id: node_id,
                compo_id,
                menu_id,
                handle,
            })
        } else {
            Node::Item(ItemNode {
                id: node_id,
                compo_id,
                menu_id,
                handle,
                separator: None,
            })
        }
    };

    if let Some(previous) = menu.nodes.insert(node) {
        warn!(menu_id = %menu.id(), node_id = previous.id(), "replacing existing node");
        discard(menu, toolkit, previous)?;
    }
    Ok(())
}

fn del_node<T: MenuToolkit>(
    menu: &mut Menu<T::Handle>,
    toolkit: &mut T,
    node_id: &str,
) -> Result<()> {
    let Some(node) = menu.nodes.remove(node_id) else {
        warn!(menu_id = %menu.id(), node_id, "deleting unknown node");
        return Ok(());
    };
    if menu.root.as_deref() == Some(node_id) {
        menu.root = None;
    }
    discard(menu, toolkit, node)
}

/// Tear down the native side of a node that left the registry.
fn discard<T: MenuToolkit>(
    menu: &Menu<T::Handle>,
    toolkit: &mut T,
    node: Node<T::Handle>,
) -> Result<()> {
    if !menu.options.detach_on_delete {
        return Ok(());
    }
    if let Some(active) = node.active_handle()
        && let Some(parent) = toolkit.parent_of(active)
    {
        toolkit.remove_child(parent, active)?;
    }
    for handle in node.handles() {
        toolkit.release(handle);
    }
    Ok(())
}

fn append_child<T: MenuToolkit>(
    menu: &mut Menu<T::Handle>,
    toolkit: &mut T,
    node_id: &str,
    child_id: String,
) -> Result<()> {
    let parent = match menu.nodes.require_mut(node_id)? {
        Node::Component(component) => {
            component.root_id = Some(child_id);
            return Ok(());
        }
        Node::Container(container) => container.handle,
        Node::Item(_) => return Err(MenuError::NotAContainer(node_id.to_string())),
    };

    let child = menu.nodes.require(&child_id)?;
    let resolved = menu
        .nodes
        .compo_root(Some(child), menu.options.max_component_depth)?
        .and_then(Node::active_handle)
        .ok_or_else(|| MenuError::UnresolvedChild {
            parent: node_id.to_string(),
            child: child_id.clone(),
        })?;
    toolkit.append_child(parent, resolved)?;
    Ok(())
}
