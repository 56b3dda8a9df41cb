use crate::U32Ext;

/// View into a buffer of 16-bit indices that can only be addressed in whole,
/// 4-byte-aligned words.
///
/// Three consecutive indices describe a triangle; since a triangle takes six
/// bytes, every other triangle starts in the middle of a word.
#[derive(Clone, Copy, Debug)]
pub struct IndicesView<'a> {
    words: &'a [u32],
}

impl<'a> IndicesView<'a> {
    /// Size of a single index, in bytes.
    pub const INDEX_SIZE: u32 = 2;

    /// Distance between two consecutive triangles, in bytes.
    pub const TRIANGLE_STRIDE: u32 = 3 * Self::INDEX_SIZE;

    pub fn new(words: &'a [u32]) -> Self {
        Self { words }
    }

    /// Returns the byte offset at which given triangle's indices start.
    pub fn triangle_offset(primitive_idx: u32) -> u32 {
        primitive_idx * Self::TRIANGLE_STRIDE
    }

    /// Loads a word; `offset` must be a multiple of four.
    pub fn load(self, offset: u32) -> u32 {
        self.words[(offset / 4) as usize]
    }

    /// Loads two consecutive words; `offset` must be a multiple of four.
    pub fn load2(self, offset: u32) -> [u32; 2] {
        [self.load(offset), self.load(offset + 4)]
    }

    /// Loads three 16-bit indices starting at given byte offset.
    ///
    /// `offset` must be even; it doesn't have to be a multiple of four.
    pub fn load3(self, offset: u32) -> [u32; 3] {
        debug_assert!(
            offset % Self::INDEX_SIZE == 0,
            "index offset must be 16-bit aligned, got {offset}"
        );

        let aligned_offset = offset & !3;

        // Eight bytes starting at the aligned offset always contain all six
        // bytes we're after, whichever half of the word `offset` points at
        let [d0, d1] = self.load2(aligned_offset);

        if offset == aligned_offset {
            [d0.lo(), d0.hi(), d1.lo()]
        } else {
            [d0.hi(), d1.lo(), d1.hi()]
        }
    }

    /// Loads indices of given triangle.
    pub fn triangle(self, primitive_idx: u32) -> [u32; 3] {
        self.load3(Self::triangle_offset(primitive_idx))
    }

    /// Returns the buffer's size, in bytes.
    pub fn len(self) -> usize {
        self.words.len() * 4
    }
}
