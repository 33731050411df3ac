use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridIndex {
    pub week: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Block footprint and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub depth: u32,
    pub height: u32,
}

/// Fully resolved description of one block, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub grid: GridIndex,
    pub position: Point3D,
    pub screen: ScreenPoint,
    pub dimension: Dimension,
    /// Serialized as six hex digits
    #[serde(with = "crate::decode::color::hex")]
    pub color: u32,
}
