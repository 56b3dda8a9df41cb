use glam::{Mat4, Vec3};

use crate::{HitAttributes, Ray};

/// Closest intersection found by an [`crate::AccelerationStructure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Distance along the ray, in units of the ray's direction
    pub t: f32,

    /// Index of the hit triangle within its geometry
    pub primitive_idx: u32,

    /// User-provided identifier of the hit instance
    pub instance_id: u32,

    /// Transformation from the hit instance's space into world-space
    pub object_to_world: Mat4,

    /// Inverse of `object_to_world`
    pub world_to_object: Mat4,

    pub attributes: HitAttributes,
}

impl Hit {
    /// Returns the hit point in world-space.
    pub fn world_position(&self, ray: Ray) -> Vec3 {
        ray.at(self.t)
    }

    /// Moves a normal from the hit instance's space into world-space.
    ///
    /// Normals transform by the inverse-transpose, which keeps them
    /// perpendicular to the surface under non-uniform scaling. Normals that
    /// cancel out to zero stay zero.
    pub fn normal_to_world(&self, normal: Vec3) -> Vec3 {
        self.world_to_object
            .transpose()
            .transform_vector3(normal)
            .normalize_or_zero()
    }
}
