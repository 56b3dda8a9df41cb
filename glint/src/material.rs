use glam::Vec4;
use glint_gpu::MaterialConstants;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    albedo: Vec4,
}

impl Material {
    pub fn with_albedo(mut self, albedo: Vec4) -> Self {
        self.albedo = albedo;
        self
    }

    pub fn albedo(&self) -> Vec4 {
        self.albedo
    }

    pub(crate) fn serialize(&self) -> MaterialConstants {
        MaterialConstants {
            albedo: self.albedo,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec4::new(0.5, 0.5, 0.5, 1.0),
        }
    }
}
