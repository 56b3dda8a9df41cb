use glint_gpu::{AccelerationStructure, Hit, HitAttributes, Ray, RayFlags};

use crate::{Bvh, BvhTriangle, Geometry, Instance};

/// Geometry together with its BVH and the instances placing it in the world.
///
/// All instances share the same geometry; they differ only by transform,
/// identifier and mask.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    geometry: Geometry,
    bvh: Bvh,
    instances: Vec<Instance>,
}

impl Scene {
    pub fn new(geometry: Geometry) -> Self {
        let bvh = Bvh::build(
            geometry
                .triangles()
                .map(|(idx, triangle)| BvhTriangle::new(idx, triangle)),
        );

        Self {
            geometry,
            bvh,
            instances: Vec::new(),
        }
    }

    pub fn add_instance(&mut self, instance: Instance) {
        log::debug!(
            "Instance added; id={}, mask={:#04x}",
            instance.instance_id,
            instance.mask
        );

        self.instances.push(instance);
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.add_instance(instance);
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}

impl AccelerationStructure for Scene {
    fn intersect(
        &self,
        ray: Ray,
        flags: RayFlags,
        instance_mask: u32,
    ) -> Option<Hit> {
        let mut ray = ray;
        let mut closest = None;

        for instance in &self.instances {
            if !instance.is_visible_to(instance_mask) {
                continue;
            }

            let Some(hit) = self
                .bvh
                .intersect(ray.transformed(instance.transform_inverse), flags)
            else {
                continue;
            };

            ray = ray.with_t_max(hit.t);

            closest = Some(Hit {
                t: hit.t,
                primitive_idx: hit.primitive_idx,
                instance_id: instance.instance_id,
                object_to_world: instance.transform,
                world_to_object: instance.transform_inverse,
                attributes: HitAttributes::new(hit.barycentrics),
            });

            if flags.contains(RayFlags::ACCEPT_FIRST_HIT_AND_END_SEARCH) {
                break;
            }
        }

        closest
    }
}
