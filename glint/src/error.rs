use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index count must be a multiple of three, got {count}")]
    IndexCountNotMultipleOfThree { count: usize },

    #[error(
        "index #{position} refers to vertex {index}, but there are only \
         {vertex_count} vertices"
    )]
    IndexOutOfBounds {
        position: usize,
        index: u16,
        vertex_count: usize,
    },

    #[error("viewport must not be empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),

    #[error("transform of instance {instance_id} is not invertible")]
    NonInvertibleTransform { instance_id: u32 },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
