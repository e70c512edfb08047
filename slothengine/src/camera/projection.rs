use crate::error::{Error, Result};
use glam::Mat4;
use log::debug;

/// Perspective parameters; `fov` is the vertical field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionParams {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = self.fov > 0.0
            && self.fov < 180.0
            && self.aspect > 0.0
            && self.near > 0.0
            && self.far > self.near;
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidProjection {
                fov: self.fov,
                aspect: self.aspect,
                near: self.near,
                far: self.far,
            })
        }
    }

    fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::new(45.0, 4.0 / 3.0, 0.1, 1000.0)
    }
}

/// Perspective matrix that is rebuilt only when its parameters change.
#[derive(Debug, Clone)]
pub struct Projection {
    params: ProjectionParams,
    matrix: Mat4,
    revision: u64,
}

impl Projection {
    pub fn new(params: ProjectionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            matrix: params.matrix(),
            revision: 1,
        })
    }

    /// Returns whether the matrix was recomputed.
    pub fn setup(&mut self, params: ProjectionParams) -> Result<bool> {
        if params == self.params {
            return Ok(false);
        }
        params.validate()?;

        self.matrix = params.matrix();
        self.params = params;
        self.revision += 1;
        debug!("Projection recomputed: {params:?}");
        Ok(true)
    }

    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Number of times the matrix has been computed.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Projection {
    fn default() -> Self {
        let params = ProjectionParams::default();
        Self {
            params,
            matrix: params.matrix(),
            revision: 1,
        }
    }
}
