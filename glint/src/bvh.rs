mod axis;
mod bounding_box;
mod builder;
mod node;
mod serializer;
mod triangle;

use glam::Vec2;
use glint_gpu::{Ray, RayFlags};

pub use self::axis::*;
pub use self::bounding_box::*;
pub use self::node::*;
pub use self::serializer::*;
pub use self::triangle::*;

/// Bounding volume hierarchy over a single geometry's triangles.
#[derive(Clone, Debug, Default)]
pub struct Bvh {
    bb: BoundingBox,
    nodes: Vec<FlatNode>,
    triangles: Vec<BvhTriangle>,
}

/// Closest triangle found by [`Bvh::intersect()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BvhHit {
    pub t: f32,
    pub primitive_idx: u32,
    pub barycentrics: Vec2,
}

impl Bvh {
    const STACK_SIZE: usize = 64;

    pub fn build(triangles: impl IntoIterator<Item = BvhTriangle>) -> Self {
        let triangles: Vec<_> = triangles.into_iter().collect();

        if triangles.is_empty() {
            return Self::default();
        }

        let root = builder::build(triangles);
        let bb = root.bb();
        let depth = root.depth();

        let mut nodes = Vec::new();
        let mut triangles = Vec::new();

        BvhSerializer::process(&mut nodes, &mut triangles, root);

        log::debug!(
            "BVH built; nodes={}, depth={}, triangles={}",
            nodes.len(),
            depth,
            triangles.len(),
        );

        Self {
            bb,
            nodes,
            triangles,
        }
    }

    pub fn bb(&self) -> BoundingBox {
        self.bb
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the closest triangle hit by given ray.
    ///
    /// Children are visited nearest-first, and every hit shrinks the ray's
    /// `t_max`, so farther subtrees get skipped as soon as something closer
    /// is found.
    pub fn intersect(&self, ray: Ray, flags: RayFlags) -> Option<BvhHit> {
        if self.is_empty() {
            return None;
        }

        let inv_direction = 1.0 / ray.direction();

        if self.bb.distance(ray.origin(), inv_direction) > ray.t_max() {
            return None;
        }

        let mut ray = ray;
        let mut hit = None;
        let mut stack = [0u32; Self::STACK_SIZE];
        let mut stack_len = 1;

        while stack_len > 0 {
            stack_len -= 1;

            let ptr = stack[stack_len];

            match self.nodes[ptr as usize] {
                FlatNode::Internal {
                    left_bb,
                    right_bb,
                    right_ptr,
                } => {
                    let left_ptr = ptr + 1;

                    let left_dist =
                        left_bb.distance(ray.origin(), inv_direction);

                    let right_dist =
                        right_bb.distance(ray.origin(), inv_direction);

                    let left_hit = left_dist <= ray.t_max();
                    let right_hit = right_dist <= ray.t_max();

                    let (near, far) = if left_dist <= right_dist {
                        ((left_ptr, left_hit), (right_ptr, right_hit))
                    } else {
                        ((right_ptr, right_hit), (left_ptr, left_hit))
                    };

                    // Far goes first, so that near gets popped first
                    for (ptr, is_hit) in [far, near] {
                        if is_hit {
                            stack[stack_len] = ptr;
                            stack_len += 1;
                        }
                    }
                }

                FlatNode::Leaf { first, count } => {
                    let triangles = &self.triangles
                        [(first as usize)..((first + count) as usize)];

                    for triangle in triangles {
                        let Some((t, barycentrics)) =
                            triangle.triangle.hit(ray, flags)
                        else {
                            continue;
                        };

                        ray = ray.with_t_max(t);

                        hit = Some(BvhHit {
                            t,
                            primitive_idx: triangle.primitive_idx,
                            barycentrics,
                        });

                        if flags
                            .contains(RayFlags::ACCEPT_FIRST_HIT_AND_END_SEARCH)
                        {
                            return hit;
                        }
                    }
                }
            }
        }

        hit
    }
}
