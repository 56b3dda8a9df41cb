use core::ops;

/// Flags controlling how the acceleration structure processes a query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RayFlags(u32);

impl RayFlags {
    pub const NONE: Self = Self(0);

    /// Terminates the query on the first accepted hit instead of searching for
    /// the closest one.
    pub const ACCEPT_FIRST_HIT_AND_END_SEARCH: Self = Self(0x04);

    /// Skips triangles whose vertices wind clockwise as seen from the ray's
    /// origin (see [`crate::Triangle::hit()`]).
    pub const CULL_BACK_FACING_TRIANGLES: Self = Self(0x10);

    /// Skips triangles whose vertices wind counter-clockwise as seen from the
    /// ray's origin.
    pub const CULL_FRONT_FACING_TRIANGLES: Self = Self(0x20);

    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for RayFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
