use crate::error::{Error, Result};
use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

type StagingBuffer = Vec<u8>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Int,
    Float,
    Vec3,
    Mat4,
}

impl UniformKind {
    pub fn size(self) -> usize {
        match self {
            UniformKind::Int => size_of::<i32>(),
            UniformKind::Float => size_of::<f32>(),
            UniformKind::Vec3 => size_of::<Vec3>(),
            UniformKind::Mat4 => size_of::<Mat4>(),
        }
    }
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Int(_) => UniformKind::Int,
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Mat4(_) => UniformKind::Mat4,
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            UniformValue::Int(value) => bytemuck::bytes_of(value),
            UniformValue::Float(value) => bytemuck::bytes_of(value),
            UniformValue::Vec3(value) => bytemuck::bytes_of(value),
            UniformValue::Mat4(value) => bytemuck::bytes_of(value),
        }
    }

    fn read(kind: UniformKind, bytes: &[u8]) -> Self {
        match kind {
            UniformKind::Int => UniformValue::Int(bytemuck::pod_read_unaligned(bytes)),
            UniformKind::Float => UniformValue::Float(bytemuck::pod_read_unaligned(bytes)),
            UniformKind::Vec3 => UniformValue::Vec3(bytemuck::pod_read_unaligned(bytes)),
            UniformKind::Mat4 => UniformValue::Mat4(bytemuck::pod_read_unaligned(bytes)),
        }
    }
}

/// Receiver of named shader uniforms, implemented by the renderer.
pub trait UniformSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UniformEntry {
    kind: UniformKind,
    offset: usize,
}

/// CPU-side uniform storage.
///
/// Each name gets a fixed slot in a byte staging buffer the first time it is
/// set; later writes overwrite that slot in place.
#[derive(Debug, Default, Clone)]
pub struct UniformTable {
    entries: FxHashMap<Box<str>, UniformEntry>,
    staging_buffer: StagingBuffer,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        let entry = self.entries.get(name)?;
        let bytes = &self.staging_buffer[entry.offset..entry.offset + entry.kind.size()];
        Some(UniformValue::read(entry.kind, bytes))
    }

    pub fn offset(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|entry| entry.offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn staging_bytes(&self) -> &[u8] {
        &self.staging_buffer
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.staging_buffer.clear();
    }
}

impl UniformSink for UniformTable {
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let slice = value.bytes();

        match self.entries.get(name) {
            Some(entry) if entry.kind != value.kind() => Err(Error::UniformTypeMismatch {
                name: name.to_owned(),
            }),
            Some(entry) => {
                let offset = entry.offset;
                self.staging_buffer[offset..offset + slice.len()].copy_from_slice(slice);
                Ok(())
            }
            None => {
                let offset = self.staging_buffer.len();
                self.staging_buffer.extend_from_slice(slice);
                self.entries.insert(
                    name.into(),
                    UniformEntry {
                        kind: value.kind(),
                        offset,
                    },
                );
                Ok(())
            }
        }
    }
}
