use crate::error::{Error, Result};
use crate::scene::node::{Node, NodeId, NodeKind};
use crate::utils::IdPool;
use glam::Mat4;
use log::debug;

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena that owns every node of a scene.
///
/// Nodes form a forest: attaching a node makes it exclusively owned by its
/// new parent, and destroying a node destroys its subtree. Parent links are
/// plain handles used for lookup and detaching only. `add_child` refuses to
/// create cycles, so every traversal sees a tree.
#[derive(Debug, Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    ids: IdPool,
    root: Option<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node.
    pub fn create_node(&mut self, name: impl Into<String>, kind: NodeKind) -> Result<NodeId> {
        let name: String = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }

        Ok(self.insert(name.into_boxed_str(), kind))
    }

    pub(crate) fn insert(&mut self, name: Box<str>, kind: NodeKind) -> NodeId {
        let index = self.ids.get_next();
        if index as usize == self.slots.len() {
            self.slots.push(Slot::default());
        }
        let slot = &mut self.slots[index as usize];
        let id = NodeId::new(index, slot.generation);
        slot.node = Some(Node::new(id, name, kind));
        id
    }

    /// Inserts the node every other node hangs off. It can never be given a
    /// parent or destroyed.
    pub(crate) fn insert_root(&mut self, name: Box<str>) -> NodeId {
        let id = self.insert(name, NodeKind::Group);
        self.root = Some(id);
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn ensure_not_root(&self, id: NodeId) -> Result<()> {
        if self.root == Some(id) {
            return Err(Error::RootNode(id));
        }
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(Error::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.get_mut(id).ok_or(Error::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.ids.in_use()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.slots.iter().filter_map(|slot| slot.node.as_ref())
    }

    /// Children of `id` in attachment order; empty for unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Walks the parent links of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Distance to the root of the tree holding `id` (root = 0).
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id).map(|_| self.ancestors(id).count())
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// A child that is still attached elsewhere is detached from its old
    /// parent first.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child {
            return Err(Error::SelfParent(child));
        }
        self.ensure_not_root(child)?;

        let child_node = self.node(child)?;
        let name = child_node.name().to_owned();
        let old_parent = child_node.parent();

        let parent_node = self.node(parent)?;
        let name_taken = parent_node.children().iter().any(|&sibling| {
            sibling != child && self.get(sibling).is_some_and(|node| node.name() == name)
        });
        if name_taken {
            return Err(Error::DuplicateName { parent, name });
        }

        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::WouldCycle { parent, child });
        }

        if let Some(old_parent) = old_parent {
            self.remove_child(old_parent, child)?;
        }

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!("Attached {name:?} ({child}) to {parent}");
        Ok(())
    }

    /// Detaches `child` from `parent` and returns the index it occupied.
    ///
    /// The child and its subtree stay alive as a separate tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<usize> {
        let index = self
            .node(parent)?
            .children()
            .iter()
            .position(|&candidate| candidate == child)
            .ok_or(Error::NotAChild { parent, child })?;

        self.node_mut(parent)?.children.remove(index);
        self.node_mut(child)?.parent = None;
        debug!("Detached {child} from {parent}");
        Ok(index)
    }

    /// Removes `id` together with its whole subtree and returns how many
    /// nodes were destroyed.
    pub fn destroy(&mut self, id: NodeId) -> Result<usize> {
        self.ensure_not_root(id)?;
        if let Some(parent) = self.node(id)?.parent() {
            self.remove_child(parent, id)?;
        }

        let mut pending = vec![id];
        let mut destroyed = 0;
        while let Some(current) = pending.pop() {
            let slot = &mut self.slots[current.index() as usize];
            if let Some(node) = slot.node.take() {
                pending.extend(node.children.iter().copied());
                slot.generation = slot.generation.wrapping_add(1);
                self.ids.free(current.index());
                destroyed += 1;
            }
        }

        debug!("Destroyed {destroyed} node(s) rooted at {id}");
        Ok(destroyed)
    }

    /// Searches the subtree below `id` for a node called `name`.
    ///
    /// Children are checked in order, each one before its own descendants.
    pub fn find_child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        for &child in self.children(id) {
            if self.get(child).is_some_and(|node| node.name() == name) {
                return Some(child);
            }
            if let Some(found) = self.find_child(child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Local transform of `id` combined with all of its ancestors.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let node = self.get(id)?;
        let mut world = node.transform.matrix();
        for ancestor in self.ancestors(id) {
            world = self.get(ancestor)?.transform.matrix() * world;
        }
        Some(world)
    }
}
