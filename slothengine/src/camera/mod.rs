//! Cameras derive a view matrix every frame and a projection matrix on demand.
//!
//! [`Camera`] owns the state every camera shares; [`CameraMode`] selects how
//! the orientation is derived: from yaw/pitch/roll ([`FreeCamera`]) or by
//! looking at a point ([`TargetCamera`]).

mod free;
mod projection;
mod target;

pub use free::{FreeCamera, Rotation};
pub use projection::{Projection, ProjectionParams};
pub use target::TargetCamera;

use crate::config::{CameraKind, EngineConfig};
use crate::error::Result;
use crate::math::Basis;
use crate::uniform::{UniformSink, UniformValue};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use log::{trace, warn};

pub const VIEW_UNIFORM: &str = "sl_view";
pub const PROJECTION_UNIFORM: &str = "sl_projection";
pub const CAMERA_POSITION_UNIFORM: &str = "sl_camera_position";

#[derive(Debug, Clone, PartialEq)]
pub enum CameraMode {
    Free(FreeCamera),
    Target(TargetCamera),
}

/// Per-frame camera data laid out for a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub position: Vec3,
    pub _padding: f32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    up: Vec3,
    rotation: Rotation,
    basis: Basis,
    view: Mat4,
    view_projection: Mat4,
    projection: Projection,
    mode: CameraMode,
}

impl Camera {
    pub fn new(mode: CameraMode) -> Self {
        Self {
            position: Vec3::ZERO,
            up: Vec3::Y,
            rotation: Rotation::default(),
            basis: Basis::default(),
            view: Mat4::IDENTITY,
            view_projection: Self::invalid_view_projection(),
            projection: Projection::default(),
            mode,
        }
    }

    pub fn free() -> Self {
        Self::new(CameraMode::Free(FreeCamera::default()))
    }

    pub fn target(target: Vec3) -> Self {
        Self::new(CameraMode::Target(TargetCamera::new(target)))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mode = match config.camera {
            CameraKind::Free => CameraMode::Free(FreeCamera::new(config.look_speed)),
            CameraKind::Target => {
                let mut target = TargetCamera::default();
                target.orbit_speed = config.orbit_speed;
                target.set_zoom_range(config.zoom_range.0, config.zoom_range.1);
                CameraMode::Target(target)
            }
        };

        let mut camera = Self::new(mode);
        camera.projection = Projection::new(config.projection)?;
        Ok(camera)
    }

    pub fn mode(&self) -> &CameraMode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut CameraMode {
        &mut self.mode
    }

    pub fn as_target(&self) -> Option<&TargetCamera> {
        match &self.mode {
            CameraMode::Target(target) => Some(target),
            CameraMode::Free(_) => None,
        }
    }

    pub fn as_target_mut(&mut self) -> Option<&mut TargetCamera> {
        match &mut self.mode {
            CameraMode::Target(target) => Some(target),
            CameraMode::Free(_) => None,
        }
    }

    pub fn as_free_mut(&mut self) -> Option<&mut FreeCamera> {
        match &mut self.mode {
            CameraMode::Free(free) => Some(free),
            CameraMode::Target(_) => None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Nominal up reference; the basis re-orthogonalises against it.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation = Rotation::new(yaw, pitch, roll);
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn direction(&self) -> Vec3 {
        self.basis.direction
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn derived_up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn field_of_view(&self) -> f32 {
        self.projection.params().fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.projection.params().aspect
    }

    /// Rebuilds the projection only if a parameter differs from the stored one.
    ///
    /// `fov` is in degrees. Returns whether the matrix was recomputed.
    pub fn setup_projection(&mut self, fov: f32, aspect: f32, near: f32, far: f32) -> Result<bool> {
        let changed = self
            .projection
            .setup(ProjectionParams::new(fov, aspect, near, far))?;
        if changed {
            self.invalidate_view_projection();
        }
        Ok(changed)
    }

    /// Recomputes the basis and view matrix; called once per frame.
    ///
    /// Queued input is consumed either way. A degenerate orientation leaves
    /// position, rotation, basis and view exactly as they were.
    pub fn update(&mut self, time: f32) -> Result<()> {
        let mut position = self.position;
        let mut rotation = self.rotation;
        let view = match &mut self.mode {
            CameraMode::Free(free) => {
                rotation = free.apply_look(rotation, time);
                let direction = rotation.direction();
                let up = Quat::from_axis_angle(direction, rotation.roll) * self.up;
                Basis::looking_along(direction, up).map(|basis| (basis, position))
            }
            CameraMode::Target(target) => {
                position = target.apply_orbit(position, self.up, time);
                target.view(position, self.up)
            }
        };

        match view {
            Ok((basis, eye)) => {
                self.position = position;
                self.rotation = rotation;
                self.basis = basis;
                self.view = basis.view_matrix(eye);
                self.invalidate_view_projection();
                trace!("Camera updated: eye {eye}, direction {}", basis.direction);
                Ok(())
            }
            Err(err) => {
                warn!("Camera update skipped at {position}: {err}");
                Err(err)
            }
        }
    }

    pub fn view_projection(&mut self) -> Mat4 {
        if self.is_invalid_view_projection() {
            self.view_projection = self.projection.matrix() * self.view;
        }
        self.view_projection
    }

    pub fn uniform(&mut self) -> CameraUniform {
        CameraUniform {
            view: self.view,
            projection: self.projection.matrix(),
            view_projection: self.view_projection(),
            position: self.position,
            _padding: 0.0,
        }
    }

    pub fn pass_to_shader(&self, sink: &mut dyn UniformSink) -> Result<()> {
        sink.set_uniform(VIEW_UNIFORM, UniformValue::Mat4(self.view))?;
        sink.set_uniform(
            PROJECTION_UNIFORM,
            UniformValue::Mat4(self.projection.matrix()),
        )?;
        sink.set_uniform(CAMERA_POSITION_UNIFORM, UniformValue::Vec3(self.position))
    }

    fn is_invalid_view_projection(&self) -> bool {
        self.view_projection.w_axis.w == 0.0
    }

    fn invalidate_view_projection(&mut self) {
        self.view_projection = Self::invalid_view_projection();
    }

    fn invalid_view_projection() -> Mat4 {
        Mat4::ZERO
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::free()
    }
}
