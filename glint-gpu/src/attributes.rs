use core::ops;

use glam::Vec2;

/// Attributes reported by the intersection system for a confirmed hit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitAttributes {
    /// x - weight of the triangle's second vertex
    /// y - weight of the triangle's third vertex
    ///
    /// (the first vertex is implicitly weighted by `1 - x - y`)
    pub barycentrics: Vec2,
}

impl HitAttributes {
    pub fn new(barycentrics: Vec2) -> Self {
        Self { barycentrics }
    }

    /// Blends per-vertex attributes at the hit point.
    pub fn interpolate<T>(&self, [a0, a1, a2]: [T; 3]) -> T
    where
        T: ops::Add<Output = T>,
        T: ops::Sub<Output = T>,
        T: ops::Mul<f32, Output = T>,
        T: Copy,
    {
        a0 + (a1 - a0) * self.barycentrics.x
            + (a2 - a0) * self.barycentrics.y
    }
}
