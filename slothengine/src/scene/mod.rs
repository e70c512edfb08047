pub mod graph;
pub mod light;
pub mod node;
pub mod traversal;
pub mod visitors;

pub use graph::SceneGraph;
pub use light::{Light, LightList, LightType, LightUniform};
pub use node::{Geometry, MeshHandle, Node, NodeId, NodeKind};
pub use traversal::{Depth, DepthFirst, GraphTraversal, PreOrder, TraversalOrder, Visitor};
pub use visitors::{NodeCollector, RenderableCollector, WorldTransforms};

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::uniform::UniformSink;
use glam::Mat4;
use log::debug;
use nohash_hasher::IntMap;

pub const ROOT_NODE: &str = "Root Node";

/// A node tree with the camera and lights rendered from it.
#[derive(Debug)]
pub struct Scene {
    graph: SceneGraph,
    root: NodeId,
    camera: Camera,
    active: bool,
    traversal: Box<dyn GraphTraversal>,
}

impl Scene {
    pub fn new() -> Self {
        Self::from_parts(Camera::default(), TraversalOrder::default().traversal())
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        let camera = Camera::from_config(config)?;
        Ok(Self::from_parts(camera, config.traversal.traversal()))
    }

    fn from_parts(camera: Camera, traversal: Box<dyn GraphTraversal>) -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.insert_root(ROOT_NODE.into());
        Self {
            graph,
            root,
            camera,
            active: true,
            traversal,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_traversal(&mut self, traversal: Box<dyn GraphTraversal>) {
        self.traversal = traversal;
    }

    /// Creates a node and attaches it directly below the root.
    pub fn create(&mut self, name: impl Into<String>, kind: NodeKind) -> Result<NodeId> {
        let id = self.graph.create_node(name, kind)?;
        if let Err(err) = self.add(id) {
            self.graph.destroy(id)?;
            return Err(err);
        }
        Ok(id)
    }

    pub fn add(&mut self, id: NodeId) -> Result<()> {
        self.graph.add_child(self.root, id)
    }

    pub fn remove(&mut self, id: NodeId) -> Result<usize> {
        self.graph.remove_child(self.root, id)
    }

    /// Walks the whole scene with the configured traversal.
    pub fn traverse(&self, visitor: &mut dyn Visitor) {
        self.traversal.traverse(&self.graph, Some(self.root), visitor);
    }

    /// Per-frame tick; inactive scenes are left untouched.
    pub fn update(&mut self, elapsed: f32) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.camera.update(elapsed)
    }

    pub fn world_transforms(&self) -> IntMap<NodeId, Mat4> {
        let mut transforms = WorldTransforms::default();
        PreOrder.traverse(&self.graph, Some(self.root), &mut transforms);
        transforms.matrices
    }

    /// Lights attached to the scene, parents before children, with point
    /// lights placed at their node's world position.
    pub fn lights(&self) -> LightList {
        let mut transforms = WorldTransforms::default();
        let mut lights = LightList::new();
        PreOrder.traverse(&self.graph, Some(self.root), &mut |node: &Node| {
            transforms.visit(node);
            if let Some(light) = node.light() {
                let mut light = *light;
                if light.light_type == LightType::Point {
                    if let Some(world) = transforms.matrices.get(&node.id()) {
                        light.position = world.w_axis.truncate();
                    }
                }
                lights.push(light);
            }
        });
        lights
    }

    pub fn renderables(&self) -> Vec<NodeId> {
        let mut renderables = RenderableCollector::default();
        self.traverse(&mut renderables);
        renderables.ids
    }

    /// Uploads camera matrices and the light array for this frame.
    pub fn pass_to_shader(&self, sink: &mut dyn UniformSink) -> Result<()> {
        self.camera.pass_to_shader(sink)?;
        let lights = self.lights();
        debug!("Passing {} light(s) to shader", lights.len());
        lights.pass_to_shader(sink)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
