use glam::{Mat4, Quat, Vec3};

/// Local placement of a node relative to its parent.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    orientation: Quat,
    scale: Vec3,
    model: Mat4,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        let mut transform = Self::default();
        transform.set_position(position);
        transform
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_model();
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
        self.update_model();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.update_model();
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::splat(scale));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn update_model(&mut self) {
        self.model =
            Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position);
    }

    /// Translation * Rotation * Scale, rebuilt by every setter.
    pub fn matrix(&self) -> Mat4 {
        self.model
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
            model: Mat4::IDENTITY,
        }
    }
}
