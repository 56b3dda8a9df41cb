use glint_gpu::prelude::*;

use crate::Bindings;

pub fn main(ray: Ray, hit: Hit, bindings: &Bindings, payload: &mut RayPayload) {
    let hit_position = hit.world_position(ray);
    let indices = bindings.indices.triangle(hit.primitive_idx);

    let normals = bindings
        .vertices
        .get_many(indices)
        .map(|vertex| vertex.normal);

    let normal = hit.normal_to_world(hit.attributes.interpolate(normals));

    payload.color = diffuse_lighting(
        bindings.scene,
        bindings.material,
        hit_position,
        normal,
    );
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn interpolates_normals() {
        // Two triangles sharing the (1, 2) edge, the second one starting at
        // an unaligned offset
        let indices = [
            u32::from_halves(0, 1),
            u32::from_halves(2, 2),
            u32::from_halves(1, 3),
        ];

        let vertices = [
            Vertex::new(vec3(0.0, 0.0, 0.0), Vec3::Y),
            Vertex::new(vec3(1.0, 0.0, 0.0), Vec3::Y),
            Vertex::new(vec3(0.0, 0.0, -1.0), Vec3::Y),
            Vertex::new(vec3(1.0, 0.0, -1.0), Vec3::X),
        ];

        let scene = SceneConstants {
            light_position: vec4(0.0, 1000.0, 0.0, 1.0),
            light_diffuse_color: Vec4::ONE,
            ..Default::default()
        };

        let material = MaterialConstants { albedo: Vec4::ONE };

        let bindings = Bindings {
            scene: &scene,
            material: &material,
            indices: IndicesView::new(&indices),
            vertices: VerticesView::new(&vertices),
        };

        let ray = Ray::new(vec3(1.0, 1.0, -1.0), -Vec3::Y);

        let hit = Hit {
            t: 1.0,
            primitive_idx: 1,
            instance_id: 0,
            object_to_world: Mat4::IDENTITY,
            world_to_object: Mat4::IDENTITY,
            attributes: HitAttributes::new(vec2(0.0, 1.0)),
        };

        let mut payload = RayPayload::default();

        main(ray, hit, &bindings, &mut payload);

        // Hit lands exactly on vertex #3, whose normal is perpendicular to the
        // light
        assert_relative_eq!(payload.color.x, 0.0, epsilon = 1e-4);

        let hit = Hit {
            attributes: HitAttributes::new(vec2(0.5, 0.0)),
            ..hit
        };

        main(ray, hit, &bindings, &mut payload);

        // Half-way between vertices #2 and #1, both facing the light
        assert_relative_eq!(payload.color.x, 1.0, epsilon = 1e-4);
    }

    fn shade_single_triangle(
        normals: [Vec3; 3],
        scene: SceneConstants,
        hit: Hit,
    ) -> Vec4 {
        let indices = [u32::from_halves(0, 1), u32::from_halves(2, 0)];

        let vertices = [
            Vertex::new(vec3(0.0, 0.0, 0.0), normals[0]),
            Vertex::new(vec3(1.0, 1.0, 0.0), normals[1]),
            Vertex::new(vec3(0.0, 0.0, 1.0), normals[2]),
        ];

        let material = MaterialConstants { albedo: Vec4::ONE };

        let bindings = Bindings {
            scene: &scene,
            material: &material,
            indices: IndicesView::new(&indices),
            vertices: VerticesView::new(&vertices),
        };

        // Lands at the world-space origin
        let ray = Ray::new(vec3(0.0, 0.0, 1.0), -Vec3::Z);
        let mut payload = RayPayload::default();

        main(ray, hit, &bindings, &mut payload);

        payload.color
    }

    fn hit(object_to_world: Mat4, barycentrics: Vec2) -> Hit {
        Hit {
            t: 1.0,
            primitive_idx: 0,
            instance_id: 0,
            object_to_world,
            world_to_object: object_to_world.inverse(),
            attributes: HitAttributes::new(barycentrics),
        }
    }

    #[test]
    fn non_uniformly_scaled_instance() {
        // Surface `x = y` stretched 4x along X faces (-1, 4, 0) in world-space;
        // a light placed right along that direction lights it fully
        let normal = vec3(-1.0, 1.0, 0.0).normalize();
        let world_normal = vec3(-1.0, 4.0, 0.0).normalize();

        let scene = SceneConstants {
            light_position: (world_normal * 1000.0).extend(1.0),
            light_diffuse_color: Vec4::ONE,
            ..Default::default()
        };

        let color = shade_single_triangle(
            [normal; 3],
            scene,
            hit(Mat4::from_scale(vec3(4.0, 1.0, 1.0)), vec2(0.25, 0.25)),
        );

        assert_relative_eq!(color.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(color.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn cancelling_normals_shade_as_ambient() {
        let scene = SceneConstants {
            light_position: vec4(0.0, 1000.0, 0.0, 1.0),
            light_ambient_color: vec4(0.1, 0.2, 0.3, 1.0),
            light_diffuse_color: Vec4::ONE,
            ..Default::default()
        };

        // Half-way between two opposite normals
        let color = shade_single_triangle(
            [Vec3::Y, -Vec3::Y, Vec3::Y],
            scene,
            hit(Mat4::IDENTITY, vec2(0.5, 0.0)),
        );

        assert!(!color.is_nan(), "{color:?}");
        assert_eq!(vec4(0.1, 0.2, 0.3, 1.0), color);
    }
}
