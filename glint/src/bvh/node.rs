use super::*;

#[derive(Clone, Debug)]
pub enum BvhNode {
    Internal {
        bb: BoundingBox,
        left: Box<Self>,
        right: Box<Self>,
    },

    Leaf {
        bb: BoundingBox,
        triangles: Vec<BvhTriangle>,
    },
}

impl BvhNode {
    pub fn bb(&self) -> BoundingBox {
        match self {
            BvhNode::Internal { bb, .. } | BvhNode::Leaf { bb, .. } => *bb,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Internal { left, right, .. } => {
                1 + left.depth().max(right.depth())
            }
            BvhNode::Leaf { .. } => 1,
        }
    }
}
