use crate::scene::light::Light;
use crate::transform::Transform;
use nohash_hasher::IsEnabled;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Handle to a node stored in a [`SceneGraph`](crate::scene::SceneGraph).
///
/// The generation changes whenever a slot is reused, so a handle to a
/// destroyed node never resolves to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn packed(&self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }
}

// Exactly one write per hash so ids can key a nohash map.
impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed());
    }
}

impl IsEnabled for NodeId {}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Opaque reference to mesh data owned by an external loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub mesh: Option<MeshHandle>,
    pub visible: bool,
}

impl Geometry {
    pub fn new(mesh: MeshHandle) -> Self {
        Self {
            mesh: Some(mesh),
            visible: true,
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.visible && self.mesh.is_some()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            mesh: None,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Group,
    Geometry(Geometry),
    Light(Light),
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: Box<str>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: Box<str>, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            parent: None,
            children: SmallVec::new(),
            transform: Transform::default(),
            kind,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Owned children in attachment order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn geometry_mut(&mut self) -> Option<&mut Geometry> {
        match &mut self.kind {
            NodeKind::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }
}
