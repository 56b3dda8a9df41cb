use super::*;

/// Node of a flattened BVH.
///
/// Internal nodes keep their left child right after themselves and point at
/// their right child; leaves point at a continuous range of triangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlatNode {
    Internal {
        left_bb: BoundingBox,
        right_bb: BoundingBox,
        right_ptr: u32,
    },

    Leaf {
        first: u32,
        count: u32,
    },
}

pub struct BvhSerializer;

impl BvhSerializer {
    pub fn process(
        nodes: &mut Vec<FlatNode>,
        triangles: &mut Vec<BvhTriangle>,
        node: BvhNode,
    ) {
        let ptr = nodes.len();

        match node {
            BvhNode::Internal { left, right, .. } => {
                let left_bb = left.bb();
                let right_bb = right.bb();

                nodes.push(FlatNode::Leaf { first: 0, count: 0 });

                Self::process(nodes, triangles, *left);

                let right_ptr = nodes.len() as u32;

                Self::process(nodes, triangles, *right);

                nodes[ptr] = FlatNode::Internal {
                    left_bb,
                    right_bb,
                    right_ptr,
                };
            }

            BvhNode::Leaf {
                triangles: mut leaf,
                ..
            } => {
                nodes.push(FlatNode::Leaf {
                    first: triangles.len() as u32,
                    count: leaf.len() as u32,
                });

                triangles.append(&mut leaf);
            }
        }
    }
}
