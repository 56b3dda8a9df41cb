use glam::{vec2, Vec2, Vec3};

use crate::{Ray, RayFlags};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Triangle {
    pub positions: [Vec3; 3],
}

impl Triangle {
    pub fn new(positions: [Vec3; 3]) -> Self {
        Self { positions }
    }

    pub fn center(&self) -> Vec3 {
        self.positions.into_iter().sum::<Vec3>() / 3.0
    }

    /// Intersects this triangle with given ray, returning hit's distance and
    /// barycentric coordinates.
    ///
    /// A triangle is front-facing when its vertices wind counter-clockwise as
    /// seen from the ray's origin in a right-handed space, i.e. when the
    /// determinant below is positive; facing is taken into account only when
    /// `flags` ask for culling.
    pub fn hit(&self, ray: Ray, flags: RayFlags) -> Option<(f32, Vec2)> {
        let [p0, p1, p2] = self.positions;
        let v0v1 = p1 - p0;
        let v0v2 = p2 - p0;

        // ---

        let pvec = ray.direction().cross(v0v2);
        let det = v0v1.dot(pvec);

        if det.abs() < f32::EPSILON {
            return None;
        }

        if det < 0.0 && flags.contains(RayFlags::CULL_BACK_FACING_TRIANGLES) {
            return None;
        }

        if det > 0.0 && flags.contains(RayFlags::CULL_FRONT_FACING_TRIANGLES)
        {
            return None;
        }

        // ---

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - p0;
        let u = tvec.dot(pvec) * inv_det;
        let qvec = tvec.cross(v0v1);
        let v = ray.direction().dot(qvec) * inv_det;
        let distance = v0v2.dot(qvec) * inv_det;

        if (u < 0.0) | (u > 1.0) | (v < 0.0) | (u + v > 1.0) {
            return None;
        }

        if !ray.accepts(distance) {
            return None;
        }

        Some((distance, vec2(u, v)))
    }
}
