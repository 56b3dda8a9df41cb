use glint_gpu::prelude::*;

use crate::{closest_hit, miss, Bindings};

/// Traces given ray through the acceleration structure and runs either the
/// closest-hit or the miss stage, whichever applies, on `payload`.
pub fn trace_ray<A>(
    tlas: &A,
    flags: RayFlags,
    instance_mask: u32,
    ray: Ray,
    bindings: &Bindings,
    payload: &mut RayPayload,
) where
    A: AccelerationStructure + ?Sized,
{
    match tlas.intersect(ray, flags, instance_mask) {
        Some(hit) => closest_hit::main(ray, hit, bindings, payload),
        None => miss::main(payload),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::miss::BACKGROUND_COLOR;

    struct FixedTlas(Option<Hit>);

    impl AccelerationStructure for FixedTlas {
        fn intersect(&self, _: Ray, _: RayFlags, _: u32) -> Option<Hit> {
            self.0
        }
    }

    const INDICES: [u32; 2] = [0x0001_0000, 0x0000_0002];

    fn vertices() -> [Vertex; 3] {
        [
            Vertex::new(vec3(-1.0, -1.0, 0.0), Vec3::Z),
            Vertex::new(vec3(1.0, -1.0, 0.0), Vec3::Z),
            Vertex::new(vec3(0.0, 1.0, 0.0), Vec3::Z),
        ]
    }

    fn scene() -> SceneConstants {
        SceneConstants {
            light_position: vec4(0.0, 0.0, 10.0, 1.0),
            light_ambient_color: Vec4::ZERO,
            light_diffuse_color: Vec4::ONE,
            ..Default::default()
        }
    }

    fn material() -> MaterialConstants {
        MaterialConstants {
            albedo: vec4(0.5, 0.5, 0.5, 1.0),
        }
    }

    fn hit() -> Hit {
        Hit {
            t: 5.0,
            primitive_idx: 0,
            instance_id: 0,
            object_to_world: Mat4::IDENTITY,
            world_to_object: Mat4::IDENTITY,
            attributes: HitAttributes::new(vec2(0.25, 0.5)),
        }
    }

    fn trace(tlas: FixedTlas) -> RayPayload {
        let scene = scene();
        let material = material();
        let vertices = vertices();

        let bindings = Bindings {
            scene: &scene,
            material: &material,
            indices: IndicesView::new(&INDICES),
            vertices: VerticesView::new(&vertices),
        };

        // Non-zero, so that we can tell whether the payload got written
        let mut payload = RayPayload {
            color: Vec4::splat(123.0),
        };

        trace_ray(
            &tlas,
            RayFlags::NONE,
            INSTANCE_MASK_ALL,
            Ray::new(vec3(0.0, 0.0, 5.0), -Vec3::Z),
            &bindings,
            &mut payload,
        );

        payload
    }

    #[test]
    fn hit_runs_closest_hit() {
        let payload = trace(FixedTlas(Some(hit())));

        assert_relative_eq!(payload.color.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(payload.color.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(payload.color.z, 0.5, epsilon = 1e-6);
        assert_relative_eq!(payload.color.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn hit_uses_instance_transform() {
        // Instance flipped upside-down, so that its normals point away from
        // the light
        let object_to_world = Mat4::from_rotation_x(core::f32::consts::PI);

        let payload = trace(FixedTlas(Some(Hit {
            object_to_world,
            world_to_object: object_to_world.inverse(),
            ..hit()
        })));

        assert_relative_eq!(payload.color.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(payload.color.w, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn miss_runs_miss() {
        assert_eq!(BACKGROUND_COLOR, trace(FixedTlas(None)).color);
    }
}
