use glint_gpu::prelude::*;

/// Color of the background, written for rays that don't hit anything.
pub const BACKGROUND_COLOR: Vec4 = Vec4::new(0.0, 0.2, 0.4, 1.0);

pub fn main(payload: &mut RayPayload) {
    payload.color = BACKGROUND_COLOR;
}
