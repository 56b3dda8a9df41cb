use std::ops::{Add, AddAssign};

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) / 2.0
    }

    pub fn half_area(&self) -> f32 {
        if !self.is_set() {
            return 0.0;
        }

        let extent = self.extent();

        extent.x * extent.y + extent.y * extent.z + extent.z * extent.x
    }

    pub fn is_set(&self) -> bool {
        self.min.x != Self::default().min.x
    }

    /// Returns the distance at which a ray enters this box, or `f32::MAX` if
    /// the ray misses it (or it's entirely behind the ray's origin).
    pub fn distance(&self, origin: Vec3, inv_direction: Vec3) -> f32 {
        let hit_min = (self.min - origin) * inv_direction;
        let hit_max = (self.max - origin) * inv_direction;

        // A ray parallel to a slab that starts right on one of its planes
        // yields `0 * inf = NaN`; such ray lies within the slab along its
        // entire length, so the slab doesn't constrain it
        let parallel = hit_min.is_nan_mask() | hit_max.is_nan_mask();

        let tmin = Vec3::select(
            parallel,
            Vec3::NEG_INFINITY,
            hit_min.min(hit_max),
        )
        .max_element();

        let tmax = Vec3::select(parallel, Vec3::INFINITY, hit_min.max(hit_max))
            .min_element();

        if tmax >= tmin && tmax >= 0.0 {
            tmin
        } else {
            f32::MAX
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        if rhs.is_set() {
            *self += rhs.min;
            *self += rhs.max;
        }
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn from_points() {
        let target: BoundingBox = [
            vec3(1.0, -2.0, 3.0),
            vec3(-1.0, 4.0, 0.0),
            vec3(0.5, 0.0, 5.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(vec3(-1.0, -2.0, 0.0), target.min());
        assert_eq!(vec3(1.0, 4.0, 5.0), target.max());
        assert_eq!(vec3(0.0, 1.0, 2.5), target.center());
        assert_eq!(2.0 * 6.0 + 6.0 * 5.0 + 5.0 * 2.0, target.half_area());
    }

    #[test]
    fn add_unset() {
        let target = BoundingBox::new(Vec3::ZERO, Vec3::ONE);

        assert_eq!(target, target + BoundingBox::default());
        assert_eq!(target, BoundingBox::default() + target);
        assert_eq!(0.0, BoundingBox::default().half_area());
    }

    #[test]
    fn distance() {
        let target = BoundingBox::new(Vec3::splat(-1.0), Vec3::ONE);
        let inv = |dir: Vec3| 1.0 / dir;

        // Hit from the outside
        assert_eq!(4.0, target.distance(vec3(0.0, 0.0, 5.0), inv(-Vec3::Z)));

        // Hit from the inside
        assert_eq!(-1.0, target.distance(Vec3::ZERO, inv(Vec3::Z)));

        // Miss
        assert_eq!(
            f32::MAX,
            target.distance(vec3(3.0, 0.0, 5.0), inv(-Vec3::Z))
        );

        // Parallel to a slab, starting on its plane
        assert_eq!(4.0, target.distance(vec3(1.0, 0.0, 5.0), inv(-Vec3::Z)));
        assert_eq!(4.0, target.distance(vec3(-1.0, 1.0, 5.0), inv(-Vec3::Z)));

        // Flat box, with the ray running within its plane
        let flat = BoundingBox::new(Vec3::ZERO, vec3(1.0, 1.0, 0.0));

        assert_eq!(5.0, flat.distance(vec3(0.0, 0.25, 5.0), inv(-Vec3::Z)));

        // Box behind the ray
        assert_eq!(
            f32::MAX,
            target.distance(vec3(0.0, 0.0, 5.0), inv(Vec3::Z))
        );
    }
}
