use crate::camera::ProjectionParams;
use crate::scene::TraversalOrder;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    #[default]
    Free,
    Target,
}

/// Settings a [`Scene`](crate::scene::Scene) is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub projection: ProjectionParams,
    pub traversal: TraversalOrder,
    pub camera: CameraKind,
    /// Clamp range of the target camera zoom.
    pub zoom_range: (f32, f32),
    pub orbit_speed: f32,
    pub look_speed: f32,
}

impl EngineConfig {
    pub fn with_projection(mut self, projection: ProjectionParams) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_camera(mut self, camera: CameraKind) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_zoom_range(mut self, min: f32, max: f32) -> Self {
        self.zoom_range = (min, max);
        self
    }

    pub fn with_orbit_speed(mut self, orbit_speed: f32) -> Self {
        self.orbit_speed = orbit_speed;
        self
    }

    pub fn with_look_speed(mut self, look_speed: f32) -> Self {
        self.look_speed = look_speed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionParams::default(),
            traversal: TraversalOrder::default(),
            camera: CameraKind::default(),
            zoom_range: (-20.0, 100.0),
            orbit_speed: 50.0,
            look_speed: 2.0,
        }
    }
}
