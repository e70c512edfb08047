use crate::error::Result;
use crate::camera::free::PITCH_LIMIT;
use crate::math::Basis;
use glam::{Quat, Vec2, Vec3};

/// Camera that always looks at a target point.
///
/// Orientation is derived from `target - position` instead of angles. Orbit
/// input rotates the position around the target; zoom moves the eye along the
/// view direction without touching the stored position.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCamera {
    target: Vec3,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    pub orbit_speed: f32,
    pending_orbit: Vec2,
}

impl TargetCamera {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            zoom: 0.0,
            min_zoom: -20.0,
            max_zoom: 100.0,
            orbit_speed: 50.0,
            pending_orbit: Vec2::ZERO,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Distance the eye is pushed along the view direction, clamped to the
    /// zoom range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn set_zoom_range(&mut self, min: f32, max: f32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_zoom = min;
        self.max_zoom = max;
        self.set_zoom(self.zoom);
    }

    /// Queues an orbit delta (x around the up axis, y around the right axis).
    pub fn orbit(&mut self, delta: Vec2) {
        self.pending_orbit += delta;
    }

    /// Drains queued orbit input and returns `position` moved by it.
    ///
    /// Elevation above the target stays within the free camera's pitch limit,
    /// so orbiting never lands on the up axis.
    pub(crate) fn apply_orbit(&mut self, position: Vec3, up: Vec3, time: f32) -> Vec3 {
        let delta = std::mem::take(&mut self.pending_orbit) * self.orbit_speed * time;
        if delta == Vec2::ZERO {
            return position;
        }

        let up = up.normalize_or(Vec3::Y);
        let mut offset = Quat::from_axis_angle(up, delta.x) * (position - self.target);
        if let Some(right) = (-offset).cross(up).try_normalize() {
            let elevation = offset.normalize().dot(up).clamp(-1.0, 1.0).asin();
            let pitch = elevation - (elevation - delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            offset = Quat::from_axis_angle(right, pitch) * offset;
        }
        self.target + offset
    }

    /// Basis looking from `position` at the target, and the zoomed eye.
    pub(crate) fn view(&self, position: Vec3, up: Vec3) -> Result<(Basis, Vec3)> {
        let basis = Basis::looking_along(self.target - position, up)?;
        Ok((basis, position + basis.direction * self.zoom))
    }
}

impl Default for TargetCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
