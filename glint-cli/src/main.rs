mod args;
mod demo;

use std::error::Error;

use clap::Parser;
use glam::{uvec2, vec4, Mat4};
use glint::{Camera, Engine, Instance, Light, Material, Scene};

use self::args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();

    log::debug!("{args:?}");

    let scene = Scene::new(demo::geometry()?)
        .with_instance(Instance::new(0, Mat4::IDENTITY)?);

    let mut engine = Engine::new(scene);

    engine.write_camera(
        Camera::default()
            .with_position(args.eye)
            .with_target(args.target)
            .with_fov_y(args.fov.to_radians()),
    );

    engine.write_light(
        Light::default()
            .with_position(args.light)
            .with_ambient(vec4(0.1, 0.1, 0.1, 1.0))
            .with_diffuse(vec4(1.0, 1.0, 1.0, 0.0)),
    );

    engine.write_material(
        Material::default().with_albedo(vec4(0.8, 0.6, 0.4, 1.0)),
    );

    engine
        .render(uvec2(args.width, args.height))?
        .save(&args.output)?;

    Ok(())
}
