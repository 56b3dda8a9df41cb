use glam::Vec3;
use glint_gpu::Triangle;

use super::*;

#[derive(Clone, Copy, Debug)]
pub struct BvhTriangle {
    pub primitive_idx: u32,
    pub triangle: Triangle,
    pub bb: BoundingBox,
    pub center: Vec3,
}

impl BvhTriangle {
    pub fn new(primitive_idx: u32, triangle: Triangle) -> Self {
        Self {
            primitive_idx,
            triangle,
            bb: triangle.positions.into_iter().collect(),
            center: triangle.center(),
        }
    }
}
