pub mod color;
pub mod count;

pub use color::decode_raw;
pub use count::extract_count;
