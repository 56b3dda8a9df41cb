use std::mem;

use super::*;

/// Nodes deeper than this are turned into leaves no matter their cost, which
/// keeps traversal within its fixed-size stack.
pub const MAX_DEPTH: usize = 48;

/// Builds BVH using SAH.
///
/// Special thanks to:
/// - https://jacco.ompf2.com/2022/04/13/how-to-build-a-bvh-part-1-basics/.
pub fn build(triangles: impl IntoIterator<Item = BvhTriangle>) -> BvhNode {
    let mut root = SahBvhNode::default();

    for triangle in triangles {
        root.add(triangle);
    }

    root.balance(1);
    root.map()
}

#[derive(Default)]
struct SahBvhNode {
    bb: BoundingBox,
    tris: Vec<BvhTriangle>,
    children: Option<[Box<Self>; 2]>,
}

impl SahBvhNode {
    fn add(&mut self, triangle: BvhTriangle) {
        self.bb += triangle.bb;
        self.tris.push(triangle);
    }

    fn balance(&mut self, depth: usize) {
        if depth >= MAX_DEPTH {
            return;
        }

        if let Some((split_by, split_at, split_cost)) =
            self.find_splitting_plane()
        {
            let current_cost = (self.tris.len() as f32) * self.bb.half_area();

            if split_cost < current_cost {
                self.split(depth, split_by, split_at);
            }
        }
    }

    fn find_splitting_plane(&self) -> Option<(Axis, f32, f32)> {
        const BINS: usize = 32;

        #[derive(Clone, Copy, Default, Debug)]
        struct SahBin {
            bb: BoundingBox,
            count: usize,
        }

        if self.tris.len() <= 1 {
            return None;
        }

        let mut best: Option<(Axis, f32, f32)> = None;

        let centroid_bb: BoundingBox =
            self.tris.iter().map(|triangle| triangle.center).collect();

        for split_by in Axis::all() {
            let extent = centroid_bb.extent()[split_by];

            // All centroids lie on the same plane, so there's nothing to split
            if extent <= 0.0 {
                continue;
            }

            let mut bins = [SahBin::default(); BINS];
            let scale = (BINS as f32) / extent;

            for triangle in &self.tris {
                let bin_idx = (triangle.center[split_by]
                    - centroid_bb.min()[split_by])
                    * scale;

                let bin_idx = (bin_idx as usize).min(BINS - 1);

                bins[bin_idx].bb += triangle.bb;
                bins[bin_idx].count += 1;
            }

            // ---

            let mut left_areas = [0.0; BINS - 1];
            let mut right_areas = [0.0; BINS - 1];
            let mut left_counts = [0; BINS - 1];
            let mut right_counts = [0; BINS - 1];
            let mut left_bb = BoundingBox::default();
            let mut right_bb = BoundingBox::default();
            let mut left_count = 0;
            let mut right_count = 0;

            for i in 0..(BINS - 1) {
                left_count += bins[i].count;
                left_counts[i] = left_count;

                left_bb += bins[i].bb;
                left_areas[i] = left_bb.half_area();

                right_count += bins[BINS - 1 - i].count;
                right_counts[BINS - 2 - i] = right_count;

                right_bb += bins[BINS - 1 - i].bb;
                right_areas[BINS - 2 - i] = right_bb.half_area();
            }

            // ---

            let scale = extent / (BINS as f32);

            for i in 0..(BINS - 1) {
                if left_counts[i] == 0 || right_counts[i] == 0 {
                    continue;
                }

                let split_cost = (left_counts[i] as f32) * left_areas[i]
                    + (right_counts[i] as f32) * right_areas[i];

                let is_current_bin_better = best
                    .map_or(true, |(_, _, best_cost)| split_cost < best_cost);

                if is_current_bin_better {
                    let split_at =
                        centroid_bb.min()[split_by] + scale * ((i + 1) as f32);

                    best = Some((split_by, split_at, split_cost));
                }
            }
        }

        best
    }

    fn split(&mut self, depth: usize, split_by: Axis, split_at: f32) {
        let mut left = Self::default();
        let mut right = Self::default();

        for triangle in mem::take(&mut self.tris) {
            if triangle.center[split_by] < split_at {
                left.add(triangle);
            } else {
                right.add(triangle);
            }
        }

        // Rounding can make the plane miss every centroid on one side; keep
        // the node a leaf then
        if left.tris.is_empty() || right.tris.is_empty() {
            self.tris = mem::take(&mut left.tris);
            self.tris.append(&mut right.tris);
            return;
        }

        left.balance(depth + 1);
        right.balance(depth + 1);

        self.children = Some([Box::new(left), Box::new(right)]);
    }

    fn map(self) -> BvhNode {
        if let Some([left, right]) = self.children {
            BvhNode::Internal {
                bb: self.bb,
                left: Box::new(left.map()),
                right: Box::new(right.map()),
            }
        } else {
            BvhNode::Leaf {
                bb: self.bb,
                triangles: self.tris,
            }
        }
    }
}
