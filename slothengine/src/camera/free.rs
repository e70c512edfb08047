use glam::{Vec2, Vec3};

/// Pitch stays just short of straight up/down so the basis never collapses.
pub(crate) const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Yaw, pitch and roll in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Rotation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Unit view direction; zero rotation looks down +Z.
    pub fn direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }
}

/// Angle-driven camera: orientation comes from yaw/pitch/roll.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    pub look_speed: f32,
    pending_look: Vec2,
}

impl FreeCamera {
    pub fn new(look_speed: f32) -> Self {
        Self {
            look_speed,
            pending_look: Vec2::ZERO,
        }
    }

    /// Queues a look delta (x turns yaw, y turns pitch) for the next update.
    pub fn look(&mut self, delta: Vec2) {
        self.pending_look += delta;
    }

    /// Drains queued look input and returns `rotation` turned by it.
    pub(crate) fn apply_look(&mut self, mut rotation: Rotation, time: f32) -> Rotation {
        let delta = std::mem::take(&mut self.pending_look) * self.look_speed * time;
        if delta != Vec2::ZERO {
            rotation.yaw += delta.x;
            rotation.pitch = (rotation.pitch + delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        rotation
    }
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(2.0)
    }
}
