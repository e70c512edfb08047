use crate::scene::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("node {parent} already has a child named {name:?}")]
    DuplicateName { parent: NodeId, name: String },

    #[error("camera target coincides with its position")]
    DegenerateDirection,

    #[error("camera direction is parallel to its up vector")]
    DirectionParallelToUp,

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {0} cannot become its own child")]
    SelfParent(NodeId),

    #[error("attaching {child} below {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },

    #[error("{0} is the scene root and cannot be attached or destroyed")]
    RootNode(NodeId),

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("node names must not be empty")]
    InvalidName,

    #[error("invalid projection: fov {fov}°, aspect {aspect}, near {near}, far {far}")]
    InvalidProjection {
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },

    #[error("uniform {name:?} was already set with a different type")]
    UniformTypeMismatch { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
