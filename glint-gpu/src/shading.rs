use glam::{Vec3, Vec4};

use crate::{MaterialConstants, SceneConstants};

/// Evaluates Lambertian diffuse lighting of the scene's point light, plus its
/// ambient term.
///
/// There's no specular term, shadowing or distance attenuation.
pub fn diffuse_lighting(
    scene: &SceneConstants,
    material: &MaterialConstants,
    hit_position: Vec3,
    normal: Vec3,
) -> Vec4 {
    let to_light = (scene.light_position() - hit_position).normalize();
    let n_dot_l = to_light.dot(normal).max(0.0);

    scene.light_ambient_color
        + material.albedo * scene.light_diffuse_color * n_dot_l
}
