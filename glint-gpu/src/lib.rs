//! Common structs and algorithms used by Glint's shaders and renderer.
//!
//! Everything here is plain, allocation-free code operating on borrowed
//! buffers, so that a single shader invocation can run on any thread.

#![allow(clippy::len_without_is_empty)]

mod acceleration_structure;
mod attributes;
mod camera;
mod hit;
mod indices;
mod material;
mod payload;
mod ray;
mod ray_flags;
mod scene;
mod shading;
mod triangle;
mod utils;
mod vertex;
mod vertices;

pub use self::acceleration_structure::*;
pub use self::attributes::*;
pub use self::camera::*;
pub use self::hit::*;
pub use self::indices::*;
pub use self::material::*;
pub use self::payload::*;
pub use self::ray::*;
pub use self::ray_flags::*;
pub use self::scene::*;
pub use self::shading::*;
pub use self::triangle::*;
pub use self::utils::*;
pub use self::vertex::*;
pub use self::vertices::*;

pub mod prelude {
    pub use glam::*;

    pub use crate::*;
}

/// Instance mask with all bits set; instances are tested against a ray only if
/// their mask overlaps the ray's mask.
pub const INSTANCE_MASK_ALL: u32 = 0xff;
