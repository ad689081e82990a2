use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;
use parking_lot::RwLock;
use slotmap::SlotMap;

use crate::errors::{Result, ShowcaseError};
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// A scene shared between the host, the renderer and timeline keyframes.
pub type SharedScene = Arc<RwLock<Scene>>;

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph: a node arena plus the list of root nodes.
#[derive(Debug)]
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Wraps the scene for sharing with timeline keyframes.
    #[must_use]
    pub fn into_shared(self) -> SharedScene {
        Arc::new(RwLock::new(self))
    }

    /// Starts building a node.
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        if self.nodes.contains_key(parent) {
            self.attach(handle, parent);
        } else {
            self.root_nodes.push(handle);
        }
        handle
    }

    /// Re-parents `child` under `parent`, detaching it from its previous
    /// parent or from the root list.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || !self.nodes.contains_key(parent) {
            return;
        }

        let old_parent = match self.nodes.get(child) {
            Some(node) => node.parent,
            None => return,
        };

        match old_parent {
            Some(old) => {
                if let Some(p) = self.nodes.get_mut(old) {
                    p.children.retain(|&c| c != child);
                }
            }
            None => self.root_nodes.retain(|&r| r != child),
        }

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Finds the first node named `name`, depth-first from the roots.
    #[must_use]
    pub fn get_object_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.root_nodes
            .iter()
            .find_map(|&root| self.find_in_subtree(root, name))
    }

    /// Like [`Scene::get_object_by_name`], failing with
    /// [`ShowcaseError::ObjectNotFound`] when nothing matches.
    pub fn find_by_name(&self, name: &str) -> Result<NodeHandle> {
        self.get_object_by_name(name)
            .ok_or_else(|| ShowcaseError::ObjectNotFound(name.to_string()))
    }

    fn find_in_subtree(&self, current: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(current)?;
        if node.name == name {
            return Some(current);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_in_subtree(child, name))
    }

    /// Refreshes cached local matrices. Returns how many were rebuilt.
    pub fn update_matrices(&mut self) -> usize {
        let mut rebuilt = 0;
        for node in self.nodes.values_mut() {
            if node.transform.update_local_matrix() {
                rebuilt += 1;
            }
        }
        rebuilt
    }
}

pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Inserts the node and returns its handle.
    pub fn build(self) -> NodeHandle {
        match self.parent {
            Some(parent) => self.scene.add_to_parent(self.node, parent),
            None => self.scene.add_node(self.node),
        }
    }
}
