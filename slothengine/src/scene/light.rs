use crate::error::Result;
use crate::uniform::{UniformSink, UniformValue};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

pub const LIGHT_COUNT_UNIFORM: &str = "sl_light_count";
pub const LIGHT_UNIFORM_ARRAY: &str = "sl_lights";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum LightType {
    Ambient = 0,
    Point = 1,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub light_type: LightType,
    pub color: Vec3,
    pub attenuation: f32,
    /// World position; only meaningful for point lights.
    pub position: Vec3,
}

impl Light {
    pub fn ambient(color: Vec3) -> Self {
        Self {
            light_type: LightType::Ambient,
            color,
            ..Self::default()
        }
    }

    pub fn point(color: Vec3, position: Vec3) -> Self {
        Self {
            light_type: LightType::Point,
            color,
            attenuation: 1.0,
            position,
        }
    }

    pub fn with_attenuation(mut self, attenuation: f32) -> Self {
        self.attenuation = attenuation;
        self
    }

    fn pass_to_shader(&self, index: usize, sink: &mut dyn UniformSink) -> Result<()> {
        let field = |name: &str| format!("{LIGHT_UNIFORM_ARRAY}[{index}].{name}");

        sink.set_uniform(&field("color"), UniformValue::Vec3(self.color))?;
        sink.set_uniform(&field("attenuation"), UniformValue::Float(self.attenuation))?;
        sink.set_uniform(&field("type"), UniformValue::Int(self.light_type as i32))?;
        if self.light_type == LightType::Point {
            sink.set_uniform(&field("position"), UniformValue::Vec3(self.position))?;
        }
        Ok(())
    }

    pub fn uniform(&self) -> LightUniform {
        LightUniform {
            position: self.position,
            attenuation: self.attenuation,
            color: self.color,
            light_type: self.light_type as u32,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Ambient,
            color: Vec3::ONE,
            attenuation: 1.0,
            position: Vec3::ZERO,
        }
    }
}

/// std140-compatible block for buffer based light arrays.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    pub position: Vec3,
    pub attenuation: f32,
    pub color: Vec3,
    pub light_type: u32,
}

/// Lights in insertion order, handed to a shader as one array.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LightList {
    lights: Vec<Light>,
}

impl LightList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn remove(&mut self, index: usize) -> Option<Light> {
        (index < self.lights.len()).then(|| self.lights.remove(index))
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    /// Uploads the light count, then every light in order.
    pub fn pass_to_shader(&self, sink: &mut dyn UniformSink) -> Result<()> {
        sink.set_uniform(LIGHT_COUNT_UNIFORM, UniformValue::Int(self.lights.len() as i32))?;
        for (index, light) in self.lights.iter().enumerate() {
            light.pass_to_shader(index, sink)?;
        }
        Ok(())
    }

    pub fn uniforms(&self) -> Vec<LightUniform> {
        self.lights.iter().map(Light::uniform).collect()
    }
}

impl FromIterator<Light> for LightList {
    fn from_iter<I: IntoIterator<Item = Light>>(iter: I) -> Self {
        Self {
            lights: iter.into_iter().collect(),
        }
    }
}
