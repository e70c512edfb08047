use crate::error::{Error, Result};
use glam::{Mat4, Vec3, Vec4};

/// Vectors shorter than this are treated as zero-length.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Orthonormal camera orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub direction: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Builds a right-handed basis looking along `direction`.
    ///
    /// `up` is only a reference; the returned up vector is re-orthogonalised
    /// against `direction` and `right`.
    pub fn looking_along(direction: Vec3, up: Vec3) -> Result<Self> {
        if direction.length() < DEGENERATE_EPSILON {
            return Err(Error::DegenerateDirection);
        }
        let direction = direction.normalize();

        let right = direction.cross(up.normalize_or_zero());
        if right.length() < DEGENERATE_EPSILON {
            return Err(Error::DirectionParallelToUp);
        }
        let right = right.normalize();
        let up = right.cross(direction).normalize();

        Ok(Self {
            direction,
            right,
            up,
        })
    }

    /// World-to-camera matrix for a camera at `eye`.
    ///
    /// ```text
    /// |  rx  ry  rz  -r.eye |
    /// |  ux  uy  uz  -u.eye |
    /// | -dx -dy -dz   d.eye |
    /// |  0   0   0    1     |
    /// ```
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        let Self {
            direction: d,
            right: r,
            up: u,
        } = *self;
        Mat4::from_cols(
            Vec4::new(r.x, u.x, -d.x, 0.0),
            Vec4::new(r.y, u.y, -d.y, 0.0),
            Vec4::new(r.z, u.z, -d.z, 0.0),
            Vec4::new(-r.dot(eye), -u.dot(eye), d.dot(eye), 1.0),
        )
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}
