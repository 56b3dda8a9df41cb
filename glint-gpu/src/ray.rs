use glam::{Mat4, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    t_min: f32,
    t_max: f32,
}

impl Ray {
    /// Closest distance at which a hit is accepted; must stay positive so that
    /// rays don't re-intersect the surface they start on.
    pub const T_MIN: f32 = 0.001;

    /// Farthest distance at which a hit is accepted.
    pub const T_MAX: f32 = 10000.0;

    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t_min: Self::T_MIN,
            t_max: Self::T_MAX,
        }
    }

    pub fn with_t_min(mut self, t_min: f32) -> Self {
        self.t_min = t_min;
        self
    }

    pub fn with_t_max(mut self, t_max: f32) -> Self {
        self.t_max = t_max;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn t_min(&self) -> f32 {
        self.t_min
    }

    pub fn t_max(&self) -> f32 {
        self.t_max
    }

    /// Returns the point lying `t` units of `direction` away from the origin.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns whether `t` lies within this ray's `[t_min, t_max]` interval.
    pub fn accepts(&self, t: f32) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Moves this ray into another space.
    ///
    /// Direction is not re-normalized, so distances measured along the
    /// transformed ray are the same as along the original one.
    pub fn transformed(&self, mat: Mat4) -> Self {
        Self {
            origin: mat.transform_point3(self.origin),
            direction: mat.transform_vector3(self.direction),
            ..*self
        }
    }
}
