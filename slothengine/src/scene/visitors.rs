use crate::scene::node::{Node, NodeId};
use crate::scene::traversal::Visitor;
use glam::Mat4;
use nohash_hasher::IntMap;

/// Records node ids in the order they were visited.
#[derive(Debug, Default, Clone)]
pub struct NodeCollector {
    pub ids: Vec<NodeId>,
}

impl Visitor for NodeCollector {
    fn visit(&mut self, node: &Node) {
        self.ids.push(node.id());
    }
}

/// World matrices of every visited node.
///
/// Needs a pre-order walk: a parent's matrix must exist before its children
/// are visited. The traversal root is treated as having an identity parent.
#[derive(Debug, Default, Clone)]
pub struct WorldTransforms {
    pub matrices: IntMap<NodeId, Mat4>,
}

impl Visitor for WorldTransforms {
    fn visit(&mut self, node: &Node) {
        let parent_world = node
            .parent()
            .and_then(|parent| self.matrices.get(&parent))
            .copied()
            .unwrap_or(Mat4::IDENTITY);
        self.matrices
            .insert(node.id(), parent_world * node.transform.matrix());
    }
}

/// Visible geometry nodes that reference a mesh.
#[derive(Debug, Default, Clone)]
pub struct RenderableCollector {
    pub ids: Vec<NodeId>,
}

impl Visitor for RenderableCollector {
    fn visit(&mut self, node: &Node) {
        if node.geometry().is_some_and(|geometry| geometry.is_renderable()) {
            self.ids.push(node.id());
        }
    }
}
