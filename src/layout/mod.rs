pub mod isometric;

pub use isometric::{layout, LayoutConfig};
