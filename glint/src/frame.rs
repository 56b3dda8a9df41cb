use std::path::Path;

use glam::{uvec2, UVec2, Vec4};
use image::{Rgba, RgbaImage};

use crate::Error;

/// Colors produced by a single render, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    size: UVec2,
    pixels: Vec<Vec4>,
}

impl Frame {
    pub(crate) fn new(size: UVec2, pixels: Vec<Vec4>) -> Self {
        debug_assert_eq!(
            (size.x as usize) * (size.y as usize),
            pixels.len(),
            "frame of size {size} got {} pixels",
            pixels.len(),
        );

        Self { size, pixels }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    /// Returns color of given cell, where (0, 0) is the top-left corner.
    pub fn get(&self, pos: UVec2) -> Option<Vec4> {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }

        self.pixels.get(Self::index(self.size, pos)).copied()
    }

    fn index(size: UVec2, pos: UVec2) -> usize {
        (pos.y as usize) * (size.x as usize) + (pos.x as usize)
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.size.x, self.size.y, |x, y| {
            let color = self.pixels[Self::index(self.size, uvec2(x, y))];
            let color = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();

            Rgba([color.x as u8, color.y as u8, color.z as u8, color.w as u8])
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();

        self.to_image().save(path)?;

        log::info!("Frame saved; path={}", path.display());

        Ok(())
    }
}
