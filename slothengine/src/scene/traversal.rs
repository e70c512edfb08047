//! Depth-bounded walks over a [`SceneGraph`].
//!
//! A traversal decides the order, a [`Visitor`] decides what happens to each
//! node. The graph is borrowed immutably for the whole walk, so visitors
//! cannot restructure the tree they are walking.

use crate::scene::graph::SceneGraph;
use crate::scene::node::{Node, NodeId};
use log::trace;
use std::fmt::Debug;

/// How many levels below the starting node a traversal may descend.
///
/// `Limited(0)` visits nothing, `Limited(1)` only the starting node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    #[default]
    Unbounded,
    Limited(u32),
}

impl Depth {
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// Budget left for the children of a node visited with `self`.
    pub fn descend(self) -> Self {
        match self {
            Depth::Unbounded => Depth::Unbounded,
            Depth::Limited(levels) => Depth::Limited(levels.saturating_sub(1)),
        }
    }
}

impl From<u32> for Depth {
    fn from(levels: u32) -> Self {
        Depth::Limited(levels)
    }
}

pub trait Visitor {
    fn visit(&mut self, node: &Node);
}

impl<F> Visitor for F
where
    F: FnMut(&Node),
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

pub trait GraphTraversal: Debug {
    /// Visits every node reachable from `root` within `depth` levels.
    ///
    /// A missing or unknown root yields no visits.
    fn traverse_to_depth(
        &self,
        graph: &SceneGraph,
        root: Option<NodeId>,
        visitor: &mut dyn Visitor,
        depth: Depth,
    );

    fn traverse(&self, graph: &SceneGraph, root: Option<NodeId>, visitor: &mut dyn Visitor) {
        self.traverse_to_depth(graph, root, visitor, Depth::Unbounded);
    }
}

/// Visits a node before any of its children.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreOrder;

impl PreOrder {
    fn walk(graph: &SceneGraph, id: NodeId, visitor: &mut dyn Visitor, depth: Depth) {
        if depth.is_exhausted() {
            return;
        }
        let Some(node) = graph.get(id) else {
            return;
        };

        trace!("pre-order visit {:?} ({id})", node.name());
        visitor.visit(node);
        for &child in node.children() {
            Self::walk(graph, child, visitor, depth.descend());
        }
    }
}

impl GraphTraversal for PreOrder {
    fn traverse_to_depth(
        &self,
        graph: &SceneGraph,
        root: Option<NodeId>,
        visitor: &mut dyn Visitor,
        depth: Depth,
    ) {
        if let Some(root) = root {
            Self::walk(graph, root, visitor, depth);
        }
    }
}

/// Visits a node after all of its children (post-order).
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl DepthFirst {
    fn walk(graph: &SceneGraph, id: NodeId, visitor: &mut dyn Visitor, depth: Depth) {
        if depth.is_exhausted() {
            return;
        }
        let Some(node) = graph.get(id) else {
            return;
        };

        for &child in node.children() {
            Self::walk(graph, child, visitor, depth.descend());
        }
        trace!("depth-first visit {:?} ({id})", node.name());
        visitor.visit(node);
    }
}

impl GraphTraversal for DepthFirst {
    fn traverse_to_depth(
        &self,
        graph: &SceneGraph,
        root: Option<NodeId>,
        visitor: &mut dyn Visitor,
        depth: Depth,
    ) {
        if let Some(root) = root {
            Self::walk(graph, root, visitor, depth);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    PreOrder,
    #[default]
    DepthFirst,
}

impl TraversalOrder {
    pub fn traversal(self) -> Box<dyn GraphTraversal> {
        match self {
            TraversalOrder::PreOrder => Box::new(PreOrder),
            TraversalOrder::DepthFirst => Box::new(DepthFirst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::NodeKind;

    /// A -> [B, C], B -> [D]
    fn sample() -> (SceneGraph, NodeId) {
        let mut graph = SceneGraph::new();
        let [a, b, c, d] = ["A", "B", "C", "D"].map(|name| {
            graph.create_node(name, NodeKind::Group).unwrap()
        });
        graph.add_child(a, b).unwrap();
        graph.add_child(a, c).unwrap();
        graph.add_child(b, d).unwrap();
        (graph, a)
    }

    fn visit_names(
        traversal: &dyn GraphTraversal,
        graph: &SceneGraph,
        root: Option<NodeId>,
        depth: Depth,
    ) -> Vec<String> {
        let mut names = Vec::new();
        traversal.traverse_to_depth(
            graph,
            root,
            &mut |node: &Node| names.push(node.name().to_owned()),
            depth,
        );
        names
    }

    #[test]
    fn pre_order_visits_parents_first() {
        let (graph, root) = sample();
        let names = visit_names(&PreOrder, &graph, Some(root), Depth::Unbounded);
        assert_eq!(names, ["A", "B", "D", "C"]);
    }

    #[test]
    fn depth_first_visits_children_first() {
        let (graph, root) = sample();
        let names = visit_names(&DepthFirst, &graph, Some(root), Depth::Unbounded);
        assert_eq!(names, ["D", "B", "C", "A"]);
    }

    #[test]
    fn zero_depth_visits_nothing() {
        let (graph, root) = sample();
        for traversal in [TraversalOrder::PreOrder, TraversalOrder::DepthFirst] {
            let names = visit_names(&*traversal.traversal(), &graph, Some(root), Depth::Limited(0));
            assert!(names.is_empty());
        }
    }

    #[test]
    fn depth_limit_applies_per_branch() {
        let (graph, root) = sample();
        assert_eq!(visit_names(&PreOrder, &graph, Some(root), Depth::Limited(1)), ["A"]);
        assert_eq!(
            visit_names(&PreOrder, &graph, Some(root), Depth::Limited(2)),
            ["A", "B", "C"]
        );
        assert_eq!(
            visit_names(&DepthFirst, &graph, Some(root), Depth::Limited(2)),
            ["B", "C", "A"]
        );
    }

    #[test]
    fn missing_root_is_a_no_op() {
        let (mut graph, root) = sample();
        assert!(visit_names(&PreOrder, &graph, None, Depth::Unbounded).is_empty());

        graph.destroy(root).unwrap();
        assert!(visit_names(&DepthFirst, &graph, Some(root), Depth::Unbounded).is_empty());
    }

    #[test]
    fn traverse_is_unbounded() {
        let (graph, root) = sample();
        let mut count = 0;
        PreOrder.traverse(&graph, Some(root), &mut |_: &Node| count += 1);
        assert_eq!(count, 4);
    }

    #[test]
    fn depth_budget_saturates() {
        assert_eq!(Depth::Limited(0).descend(), Depth::Limited(0));
        assert_eq!(Depth::Unbounded.descend(), Depth::Unbounded);
        assert!(!Depth::Unbounded.is_exhausted());
    }
}
