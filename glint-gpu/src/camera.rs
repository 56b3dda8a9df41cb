use glam::{vec2, UVec2, Vec2, Vec4Swizzles};

use crate::{Ray, SceneConstants};

impl SceneConstants {
    /// Casts a ray from the camera through the center of given screen cell.
    ///
    /// `projection_to_world` must map clip-space points onto a `w != 0`.
    pub fn camera_ray(&self, screen_pos: UVec2, screen_size: UVec2) -> Ray {
        let ndc = screen_to_ndc(
            screen_pos.as_vec2() + Vec2::splat(0.5),
            screen_size.as_vec2(),
        );

        let world = self.projection_to_world * ndc.extend(0.0).extend(1.0);
        let world = world.xyz() / world.w;
        let origin = self.camera_position();

        Ray::new(origin, (world - origin).normalize())
    }
}

/// Maps a point in screen-coordinates (origin at the top-left corner, Y going
/// down) into normalized device coordinates (origin at the center, Y going
/// up).
pub fn screen_to_ndc(screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
    let ndc = screen_pos / screen_size * 2.0 - Vec2::ONE;

    vec2(ndc.x, -ndc.y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{uvec2, vec3, Mat4, Vec3};

    use super::*;

    fn scene() -> SceneConstants {
        let eye = vec3(0.0, 0.0, 5.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj =
            Mat4::perspective_rh(90.0_f32.to_radians(), 1.0, 0.1, 100.0);

        SceneConstants {
            projection_to_world: (proj * view).inverse(),
            camera_position: eye.extend(1.0),
            ..Default::default()
        }
    }

    #[test]
    fn screen_to_ndc_center() {
        let size = vec2(64.0, 48.0);
        let ndc = screen_to_ndc(size / 2.0, size);

        assert_relative_eq!(ndc.x, 0.0);
        assert_relative_eq!(ndc.y, 0.0);
    }

    #[test]
    fn screen_to_ndc_corners() {
        let size = vec2(64.0, 48.0);

        assert_eq!(vec2(-1.0, 1.0), screen_to_ndc(Vec2::ZERO, size));
        assert_eq!(vec2(1.0, -1.0), screen_to_ndc(size, size));
        assert_eq!(vec2(1.0, 1.0), screen_to_ndc(vec2(64.0, 0.0), size));
    }

    #[test]
    fn center_cell_maps_to_ndc_origin() {
        // Cell (w/2 - 0.5, h/2 - 0.5) gets shifted onto the pixel center
        // before normalization
        let size = vec2(64.0, 48.0);
        let cell = vec2(31.5, 23.5);
        let ndc = screen_to_ndc(cell + Vec2::splat(0.5), size);

        assert_relative_eq!(ndc.x, 0.0);
        assert_relative_eq!(ndc.y, 0.0);
    }

    #[test]
    fn camera_ray_through_center() {
        let ray = scene().camera_ray(uvec2(16, 16), uvec2(33, 33));

        assert_eq!(vec3(0.0, 0.0, 5.0), ray.origin());
        assert_relative_eq!(ray.direction().x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction().y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction().z, -1.0, epsilon = 1e-5);
        assert_eq!(Ray::T_MIN, ray.t_min());
        assert_eq!(Ray::T_MAX, ray.t_max());
    }

    #[test]
    fn camera_ray_through_top_left() {
        let ray = scene().camera_ray(uvec2(0, 0), uvec2(2, 2));

        // With a 90-degree field of view, pixel centers of a 2x2 grid lie
        // half-way towards the frustum's edges
        let expected = vec3(-0.5, 0.5, -1.0).normalize();

        assert_relative_eq!(ray.direction().x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(ray.direction().y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(ray.direction().z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn camera_ray_is_normalized() {
        let scene = scene();

        for y in 0..4 {
            for x in 0..4 {
                let ray = scene.camera_ray(uvec2(x, y), uvec2(4, 4));

                assert_relative_eq!(
                    ray.direction().length(),
                    1.0,
                    epsilon = 1e-5
                );
            }
        }
    }
}
