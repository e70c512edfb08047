//! Scene core of a small rendering engine: an arena-backed scene graph with
//! pluggable traversals, cameras that derive view and projection matrices,
//! and the light list handed to shaders.
//!
//! ```rust
//! use glam::Vec3;
//! use slothengine::{Camera, NodeCollector, NodeKind, Scene};
//!
//! let mut scene = Scene::new();
//! let cube = scene.create("cube", NodeKind::Group).unwrap();
//!
//! let mut camera = Camera::target(Vec3::ZERO);
//! camera.set_position(Vec3::new(0.0, 0.0, 5.0));
//! scene.set_camera(camera);
//! scene.update(1.0 / 60.0).unwrap();
//!
//! let mut visited = NodeCollector::default();
//! scene.traverse(&mut visited);
//! assert_eq!(visited.ids, [cube, scene.root()]);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod math;
pub mod scene;
pub mod transform;
pub mod uniform;
mod utils;

pub use camera::{
    Camera, CameraMode, CameraUniform, FreeCamera, Projection, ProjectionParams, Rotation,
    TargetCamera,
};
pub use config::{CameraKind, EngineConfig};
pub use error::{Error, Result};
pub use math::Basis;
pub use scene::{
    Depth, DepthFirst, Geometry, GraphTraversal, Light, LightList, LightType, MeshHandle, Node,
    NodeCollector, NodeId, NodeKind, PreOrder, RenderableCollector, Scene, SceneGraph,
    TraversalOrder, Visitor, WorldTransforms,
};
pub use transform::Transform;
pub use uniform::{UniformSink, UniformTable, UniformValue};
