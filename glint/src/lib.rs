//! Glint: a CPU ray tracer that runs its shading pipeline once per pixel, in
//! parallel.
//!
//! Scene is described by a [`Geometry`] placed in the world through
//! [`Instance`]s, seen through a [`Camera`] and lit by a single [`Light`];
//! [`Engine::render()`] turns it into a [`Frame`].

mod bvh;
mod camera;
mod error;
mod frame;
mod geometry;
mod instance;
mod light;
mod material;
mod scene;

use std::time::Instant;

use glam::{uvec2, UVec2, Vec4};
use glint_gpu::{MaterialConstants, SceneConstants};
use glint_shaders::{raygen, Bindings};
use rayon::prelude::*;

pub use self::bvh::*;
pub use self::camera::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::geometry::*;
pub use self::instance::*;
pub use self::light::*;
pub use self::material::*;
pub use self::scene::*;

pub use glint_gpu as gpu;

#[derive(Debug)]
pub struct Engine {
    scene: Scene,
    camera: Camera,
    light: Light,
    material: Material,
}

impl Engine {
    pub fn new(scene: Scene) -> Self {
        log::info!("Initializing");

        Self {
            scene,
            camera: Default::default(),
            light: Default::default(),
            material: Default::default(),
        }
    }

    pub fn write_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub fn write_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn write_light(&mut self, light: Light) {
        self.light = light;
    }

    pub fn write_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the constants shared by all shader invocations of a render
    /// with given size.
    pub fn scene_constants(
        &self,
        size: UVec2,
    ) -> Result<SceneConstants, Error> {
        let aspect_ratio = (size.x as f32) / (size.y as f32);
        let projection_to_world =
            self.camera.projection_to_world(aspect_ratio)?;

        Ok(SceneConstants {
            projection_to_world,
            camera_position: self.camera.position().extend(1.0),
            light_position: self.light.position().extend(1.0),
            light_ambient_color: self.light.ambient(),
            light_diffuse_color: self.light.diffuse(),
        })
    }

    /// Renders the scene into a frame of given size.
    ///
    /// Each cell runs the whole pipeline on its own (ray generation, then
    /// either closest-hit or miss); rows are distributed across rayon's
    /// thread pool.
    pub fn render(&self, size: UVec2) -> Result<Frame, Error> {
        if size.x == 0 || size.y == 0 {
            return Err(Error::EmptyViewport {
                width: size.x,
                height: size.y,
            });
        }

        if self.scene.instances().is_empty() {
            log::warn!("Scene has no instances; every ray will miss");
        }

        let scene = self.scene_constants(size)?;
        let material: MaterialConstants = self.material.serialize();
        let geometry = self.scene.geometry();

        let bindings = Bindings {
            scene: &scene,
            material: &material,
            indices: geometry.indices(),
            vertices: geometry.vertices(),
        };

        let tt = Instant::now();
        let mut pixels =
            vec![Vec4::ZERO; (size.x as usize) * (size.y as usize)];

        pixels
            .par_chunks_mut(size.x as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, output) in row.iter_mut().enumerate() {
                    raygen::main(
                        uvec2(x as u32, y as u32),
                        size,
                        &self.scene,
                        &bindings,
                        output,
                    );
                }
            });

        log::info!(
            "Frame rendered; size={}x{}, took={}",
            size.x,
            size.y,
            humantime::format_duration(tt.elapsed())
        );

        Ok(Frame::new(size, pixels))
    }
}
