use glint_gpu::{IndicesView, Triangle, U32Ext, Vertex, VerticesView};

use crate::Error;

/// Index and vertex buffers of a triangle mesh.
///
/// Indices are kept as 16-bit values packed two per word, in the same layout
/// the shaders read them in.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    indices: Vec<u32>,
    triangle_count: u32,
    vertices: Vec<Vertex>,
}

impl Geometry {
    pub fn new(indices: &[u16], vertices: Vec<Vertex>) -> Result<Self, Error> {
        if indices.len() % 3 != 0 {
            return Err(Error::IndexCountNotMultipleOfThree {
                count: indices.len(),
            });
        }

        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= vertices.len())
        {
            return Err(Error::IndexOutOfBounds {
                position,
                index,
                vertex_count: vertices.len(),
            });
        }

        let triangle_count = (indices.len() / 3) as u32;

        // Odd index counts get padded with a zeroed half-word, so that loading
        // two words at the last triangle never reads past the buffer
        let indices = indices
            .chunks(2)
            .map(|chunk| {
                let lo = chunk[0] as u32;
                let hi = chunk.get(1).copied().unwrap_or_default() as u32;

                u32::from_halves(lo, hi)
            })
            .collect();

        log::debug!(
            "Geometry created; triangles={}, vertices={}",
            triangle_count,
            vertices.len()
        );

        Ok(Self {
            indices,
            triangle_count,
            vertices,
        })
    }

    pub fn indices(&self) -> IndicesView<'_> {
        IndicesView::new(&self.indices)
    }

    pub fn vertices(&self) -> VerticesView<'_> {
        VerticesView::new(&self.vertices)
    }

    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }

    /// Returns the positions of given triangle's vertices.
    pub fn triangle(&self, primitive_idx: u32) -> Triangle {
        let indices = self.indices().triangle(primitive_idx);

        Triangle::new(
            self.vertices()
                .get_many(indices)
                .map(|vertex| vertex.position),
        )
    }

    pub fn triangles(&self) -> impl Iterator<Item = (u32, Triangle)> + '_ {
        (0..self.triangle_count)
            .map(|primitive_idx| (primitive_idx, self.triangle(primitive_idx)))
    }
}
