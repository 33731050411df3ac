pub mod day;
pub mod render;
pub mod stats;

pub use day::{DayRecord, RawAnnotation, RawColor, RawDay, WeekGroup};
pub use render::{Dimension, GridIndex, Point3D, RenderInstruction, ScreenPoint};
pub use stats::{BestDay, CurrentWeek, StatisticsSummary, Streak};
