use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

/// Per-frame constants shared by all shader invocations of a dispatch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SceneConstants {
    /// Inverse of `projection * view`; maps clip-space into world-space.
    pub projection_to_world: Mat4,

    /// xyz - camera position in world-space
    /// w - unused
    pub camera_position: Vec4,

    /// xyz - point light position in world-space
    /// w - unused
    pub light_position: Vec4,

    pub light_ambient_color: Vec4,
    pub light_diffuse_color: Vec4,
}

impl SceneConstants {
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position.xyz()
    }

    pub fn light_position(&self) -> Vec3 {
        self.light_position.xyz()
    }
}
