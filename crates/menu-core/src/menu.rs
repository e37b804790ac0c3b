//! Menu instances.

use std::fmt;
use std::time::Instant;

use menu_model::{Change, Mutation};
use tracing::{error, info, info_span};

use crate::error::Result;
use crate::node::{ContainerNode, Node};
use crate::reconcile;
use crate::registry::NodeRegistry;
use crate::toolkit::MenuToolkit;

/// Tunables applied while reconciling.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOptions {
    /// Font size given to every new native submenu and item.
    pub font_size: f32,
    /// Maximum number of component hops when resolving a child.
    pub max_component_depth: usize,
    /// Detach and release a deleted node's native controls.
    pub detach_on_delete: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            max_component_depth: 64,
            detach_on_delete: true,
        }
    }
}

/// One abstract menu and the nodes rendered into it.
#[derive(Debug)]
pub struct Menu<H> {
    id: String,
    pub(crate) nodes: NodeRegistry<H>,
    pub(crate) root: Option<String>,
    pub(crate) options: MenuOptions,
}

impl<H> Menu<H>
where
    H: Copy + Eq + fmt::Debug,
{
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_options(id, MenuOptions::default())
    }

    pub fn with_options(id: impl Into<String>, options: MenuOptions) -> Self {
        Self {
            id: id.into(),
            nodes: NodeRegistry::new(),
            root: None,
            options,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn nodes(&self) -> &NodeRegistry<H> {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node<H>> {
        self.nodes.get(id)
    }

    pub fn root_id(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn root(&self) -> Option<&ContainerNode<H>> {
        self.root
            .as_deref()
            .and_then(|id| self.nodes.get(id))
            .and_then(Node::as_container)
    }

    /// Forget the rendered root ahead of a fresh render. Nodes are kept.
    pub fn load(&mut self) {
        self.root = None;
        for node in self.nodes.iter_mut() {
            if let Node::Component(component) = node {
                component.is_root_compo = false;
            }
        }
    }

    /// Apply a batch of changes in order.
    ///
    /// The first failing change aborts the batch; changes applied before it
    /// stay applied.
    pub fn render<T>(&mut self, toolkit: &mut T, changes: &[Change]) -> Result<()>
    where
        T: MenuToolkit<Handle = H>,
    {
        let span = info_span!("render", menu_id = %self.id, changes = changes.len());
        let _guard = span.enter();
        let start = Instant::now();

        for (index, change) in changes.iter().enumerate() {
            let outcome = change
                .to_mutation()
                .map_err(Into::into)
                .and_then(|mutation| self.apply(toolkit, mutation));
            if let Err(err) = outcome {
                error!(
                    menu_id = %self.id,
                    index,
                    action = change.action,
                    error = %err,
                    "render aborted"
                );
                return Err(err);
            }
        }

        info!(
            menu_id = %self.id,
            changes = changes.len(),
            nodes = self.nodes.len(),
            duration_us = start.elapsed().as_micros(),
            "render complete"
        );
        Ok(())
    }

    /// Apply a single mutation.
    pub fn apply<T>(&mut self, toolkit: &mut T, mutation: Mutation) -> Result<()>
    where
        T: MenuToolkit<Handle = H>,
    {
        reconcile::apply(self, toolkit, mutation)
    }

    /// Release every native control owned by this menu and empty it.
    pub fn release<T>(&mut self, toolkit: &mut T)
    where
        T: MenuToolkit<Handle = H>,
    {
        self.root = None;
        for node in self.nodes.drain() {
            for handle in node.handles() {
                toolkit.release(handle);
            }
        }
    }
}
