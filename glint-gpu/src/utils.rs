mod u32_ext;

pub use self::u32_ext::*;
