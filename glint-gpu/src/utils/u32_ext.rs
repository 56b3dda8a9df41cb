pub trait U32Ext
where
    Self: Sized,
{
    /// Packs two 16-bit halves into a word, `lo` landing in the lower bits.
    fn from_halves(lo: u32, hi: u32) -> Self;

    /// Returns the lower 16 bits of this word.
    fn lo(self) -> u32;

    /// Returns the upper 16 bits of this word.
    fn hi(self) -> u32;
}

impl U32Ext for u32 {
    fn from_halves(lo: u32, hi: u32) -> Self {
        (lo & 0xffff) | (hi << 16)
    }

    fn lo(self) -> u32 {
        self & 0xffff
    }

    fn hi(self) -> u32 {
        self >> 16
    }
}
