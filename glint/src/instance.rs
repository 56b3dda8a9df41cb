use glam::Mat4;
use glint_gpu::INSTANCE_MASK_ALL;

use crate::Error;

/// Placement of the scene's geometry in world-space.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub(crate) instance_id: u32,
    pub(crate) mask: u8,
    pub(crate) transform: Mat4,
    pub(crate) transform_inverse: Mat4,
}

impl Instance {
    pub fn new(instance_id: u32, transform: Mat4) -> Result<Self, Error> {
        let transform_inverse = transform.inverse();

        if transform.determinant() == 0.0 || !transform_inverse.is_finite() {
            return Err(Error::NonInvertibleTransform { instance_id });
        }

        Ok(Self {
            instance_id,
            mask: INSTANCE_MASK_ALL as u8,
            transform,
            transform_inverse,
        })
    }

    /// Sets the mask; the instance is visible only to rays whose mask shares
    /// at least one bit with it.
    pub fn with_mask(mut self, mask: u8) -> Self {
        self.mask = mask;
        self
    }

    pub fn instance_id(&self) -> u32 {
        self.instance_id
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub(crate) fn is_visible_to(&self, instance_mask: u32) -> bool {
        (self.mask as u32) & instance_mask != 0
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self {
            instance_id: 0,
            mask: INSTANCE_MASK_ALL as u8,
            transform: Mat4::IDENTITY,
            transform_inverse: Mat4::IDENTITY,
        }
    }
}
