use crate::Vertex;

#[derive(Clone, Copy, Debug)]
pub struct VerticesView<'a> {
    buffer: &'a [Vertex],
}

impl<'a> VerticesView<'a> {
    pub fn new(buffer: &'a [Vertex]) -> Self {
        Self { buffer }
    }

    pub fn get(self, idx: u32) -> Vertex {
        self.buffer[idx as usize]
    }

    /// Fetches all three vertices of a triangle.
    pub fn get_many(self, [i0, i1, i2]: [u32; 3]) -> [Vertex; 3] {
        [self.get(i0), self.get(i1), self.get(i2)]
    }

    pub fn len(self) -> usize {
        self.buffer.len()
    }
}
