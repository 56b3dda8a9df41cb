use crate::{Hit, Ray, RayFlags};

/// Spatial index answering ray-triangle queries.
///
/// Implementations are shared by all shader invocations of a dispatch, so
/// querying must not require mutable access.
pub trait AccelerationStructure {
    /// Returns the closest hit within ray's `[t_min, t_max]` interval, taking
    /// into account only instances whose mask overlaps `instance_mask`.
    fn intersect(
        &self,
        ray: Ray,
        flags: RayFlags,
        instance_mask: u32,
    ) -> Option<Hit>;
}

impl<T> AccelerationStructure for &T
where
    T: AccelerationStructure + ?Sized,
{
    fn intersect(
        &self,
        ray: Ray,
        flags: RayFlags,
        instance_mask: u32,
    ) -> Option<Hit> {
        (**self).intersect(ray, flags, instance_mask)
    }
}
