use glint_gpu::prelude::*;

use crate::{trace_ray, Bindings};

/// Flags of primary rays.
pub const RAY_FLAGS: RayFlags = RayFlags::CULL_BACK_FACING_TRIANGLES;

pub fn main<A>(
    global_id: UVec2,
    dispatch_size: UVec2,
    tlas: &A,
    bindings: &Bindings,
    output: &mut Vec4,
) where
    A: AccelerationStructure + ?Sized,
{
    let ray = bindings.scene.camera_ray(global_id, dispatch_size);
    let mut payload = RayPayload::default();

    trace_ray(
        tlas,
        RAY_FLAGS,
        INSTANCE_MASK_ALL,
        ray,
        bindings,
        &mut payload,
    );

    *output = payload.color;
}
