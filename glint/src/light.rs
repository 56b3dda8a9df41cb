use glam::{Vec3, Vec4};

/// Point light with a constant ambient term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    position: Vec3,
    ambient: Vec4,
    diffuse: Vec4,
}

impl Light {
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_ambient(mut self, ambient: Vec4) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Vec4) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn ambient(&self) -> Vec4 {
        self.ambient
    }

    pub fn diffuse(&self) -> Vec4 {
        self.diffuse
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            // Alpha comes from the ambient term, since the diffuse term gets
            // added on top of it
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vec4::new(1.0, 1.0, 1.0, 0.0),
        }
    }
}
