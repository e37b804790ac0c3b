//! Node registry and component resolution.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::{MenuError, Result};
use crate::node::Node;

/// Owns every node of one menu, keyed by node id.
#[derive(Debug)]
pub struct NodeRegistry<H> {
    nodes: HashMap<String, Node<H>>,
}

impl<H> Default for NodeRegistry<H> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<H: Copy> NodeRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node<H>> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node<H>> {
        self.nodes.get_mut(id)
    }

    /// Look up a node that must exist.
    pub fn require(&self, id: &str) -> Result<&Node<H>> {
        self.get(id)
            .ok_or_else(|| MenuError::NodeNotFound(id.to_string()))
    }

    pub fn require_mut(&mut self, id: &str) -> Result<&mut Node<H>> {
        self.get_mut(id)
            .ok_or_else(|| MenuError::NodeNotFound(id.to_string()))
    }

    /// Insert a node under its own id, returning the node it replaced.
    pub fn insert(&mut self, node: Node<H>) -> Option<Node<H>> {
        self.nodes.insert(node.id().to_string(), node)
    }

    pub fn remove(&mut self, id: &str) -> Option<Node<H>> {
        self.nodes.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<H>> {
        self.nodes.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node<H>> {
        self.nodes.values_mut()
    }

    /// Node ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Node<H>> + '_ {
        self.nodes.drain().map(|(_, node)| node)
    }

    /// Follow component placeholders from `node` to the first node that
    /// renders natively.
    ///
    /// Returns `Ok(None)` when the chain ends at a component without a root.
    /// A chain that revisits a component, or exceeds `max_depth` components,
    /// fails with [`MenuError::CycleDetected`]; a root id naming an absent
    /// node fails with [`MenuError::NodeNotFound`].
    pub fn compo_root<'a>(
        &'a self,
        node: Option<&'a Node<H>>,
        max_depth: usize,
    ) -> Result<Option<&'a Node<H>>> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = node;
        while let Some(Node::Component(component)) = current {
            if !visited.insert(&component.id) || visited.len() > max_depth {
                return Err(MenuError::CycleDetected(component.id.clone()));
            }
            let Some(root_id) = &component.root_id else {
                return Ok(None);
            };
            current = Some(self.require(root_id)?);
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ComponentNode, ItemNode};

    fn compo(id: &str, root: Option<&str>) -> Node<u32> {
        Node::Component(ComponentNode {
            id: id.into(),
            name: "c".into(),
            root_id: root.map(str::to_string),
            is_root_compo: false,
        })
    }

    fn item(id: &str, handle: u32) -> Node<u32> {
        Node::Item(ItemNode {
            id: id.into(),
            compo_id: String::new(),
            menu_id: "m".into(),
            handle,
            separator: None,
        })
    }

    #[test]
    fn native_node_resolves_to_itself() {
        let mut registry = NodeRegistry::new();
        registry.insert(item("i", 7));
        let node = registry.get("i");
        let resolved = registry.compo_root(node, 8).unwrap().unwrap();
        assert_eq!(resolved.id(), "i");
    }

    #[test]
    fn none_resolves_to_none() {
        let registry: NodeRegistry<u32> = NodeRegistry::new();
        assert!(registry.compo_root(None, 8).unwrap().is_none());
    }

    #[test]
    fn chain_resolves_to_terminal_node() {
        let mut registry = NodeRegistry::new();
        registry.insert(compo("a", Some("b")));
        registry.insert(compo("b", Some("i")));
        registry.insert(item("i", 7));
        let resolved = registry.compo_root(registry.get("a"), 8).unwrap().unwrap();
        assert_eq!(resolved.active_handle(), Some(7));
    }

    #[test]
    fn rootless_component_resolves_to_none() {
        let mut registry = NodeRegistry::new();
        registry.insert(compo("a", Some("b")));
        registry.insert(compo("b", None));
        assert!(registry.compo_root(registry.get("a"), 8).unwrap().is_none());
    }

    #[test]
    fn dangling_root_is_lookup_failure() {
        let mut registry = NodeRegistry::new();
        registry.insert(compo("a", Some("gone")));
        let err = registry.compo_root(registry.get("a"), 8).unwrap_err();
        assert!(matches!(err, MenuError::NodeNotFound(id) if id == "gone"));
    }

    #[test]
    fn cycle_is_detected() {
        let mut registry = NodeRegistry::new();
        registry.insert(compo("a", Some("b")));
        registry.insert(compo("b", Some("a")));
        let err = registry.compo_root(registry.get("a"), 64).unwrap_err();
        assert!(matches!(err, MenuError::CycleDetected(_)));

        registry.insert(compo("self", Some("self")));
        let err = registry.compo_root(registry.get("self"), 64).unwrap_err();
        assert!(matches!(err, MenuError::CycleDetected(id) if id == "self"));
    }

    #[test]
    fn depth_bound_is_enforced() {
        let mut registry = NodeRegistry::new();
        registry.insert(compo("a", Some("b")));
        registry.insert(compo("b", Some("c")));
        registry.insert(compo("c", Some("i")));
        registry.insert(item("i", 1));
        assert!(registry.compo_root(registry.get("a"), 3).is_ok());
        assert!(matches!(
            registry.compo_root(registry.get("a"), 2),
            Err(MenuError::CycleDetected(_))
        ));
    }
}
