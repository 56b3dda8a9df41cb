use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;

/// Renders a demo scene into a PNG file.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
pub struct Args {
    /// Width of the rendered image, in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Height of the rendered image, in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Where to save the image
    #[arg(short, long, default_value = "glint.png")]
    pub output: PathBuf,

    /// Camera position, as `x,y,z`
    #[arg(long, default_value = "3,2.5,5", value_parser = parse_vec3)]
    pub eye: Vec3,

    /// Point the camera looks at, as `x,y,z`
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3)]
    pub target: Vec3,

    /// Light position, as `x,y,z`
    #[arg(long, default_value = "4,6,3", value_parser = parse_vec3)]
    pub light: Vec3,

    /// Vertical field of view, in degrees
    #[arg(long, default_value = "45")]
    pub fov: f32,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid number: {err}"))?;

    match components[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!(
            "expected three comma-separated numbers, got {}",
            components.len()
        )),
    }
}
