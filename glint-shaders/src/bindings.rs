use glint_gpu::prelude::*;

/// Read-only resources visible to the shaders.
#[derive(Clone, Copy, Debug)]
pub struct Bindings<'a> {
    pub scene: &'a SceneConstants,
    pub material: &'a MaterialConstants,
    pub indices: IndicesView<'a>,
    pub vertices: VerticesView<'a>,
}
