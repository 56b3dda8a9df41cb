use glam::Vec4;

/// Per-ray state threaded through a query; written by exactly one of the
/// closest-hit and miss stages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayPayload {
    pub color: Vec4,
}
