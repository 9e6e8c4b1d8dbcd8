//! Core data types: the circular body record and the box it lives in.

pub mod body;
pub mod types;

pub use body::{Body, BodyId, BodyKind};
pub use types::{Bounds, WallMode};
