use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{
    Dimension, GridIndex, Point3D, RenderInstruction, ScreenPoint, WeekGroup,
};

pub const SIZE: u32 = 16;
pub const MAX_HEIGHT: u32 = 100;
pub const MIN_HEIGHT: u32 = 3;
pub const WEEK_OFFSET: u32 = 14;
pub const DAY_OFFSET: u32 = 13;
pub const ORIGIN: (f64, f64) = (130.0, 90.0);

fn default_size() -> u32 {
    SIZE
}
fn default_max_height() -> u32 {
    MAX_HEIGHT
}
fn default_min_height() -> u32 {
    MIN_HEIGHT
}
fn default_week_offset() -> u32 {
    WEEK_OFFSET
}
fn default_day_offset() -> u32 {
    DAY_OFFSET
}
fn default_origin_x() -> f64 {
    ORIGIN.0
}
fn default_origin_y() -> f64 {
    ORIGIN.1
}

/// Block and projection constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Cube footprint in both horizontal axes
    #[serde(default = "default_size")]
    pub size: u32,
    /// Height added for the busiest day
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    /// Height of an empty day
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    #[serde(default = "default_week_offset")]
    pub week_offset: u32,
    #[serde(default = "default_day_offset")]
    pub day_offset: u32,
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            max_height: MAX_HEIGHT,
            min_height: MIN_HEIGHT,
            week_offset: WEEK_OFFSET,
            day_offset: DAY_OFFSET,
            origin_x: ORIGIN.0,
            origin_y: ORIGIN.1,
        }
    }
}

impl LayoutConfig {
    /// Grid column spread by the week offset, the way the calendar spaces weeks.
    fn column(&self, week: u32) -> f64 {
        let step = self.week_offset.max(1) as f64;
        step * (week as f64 + 1.0) / (step + 1.0)
    }

    fn row(&self, day: u32) -> f64 {
        let step = self.week_offset.max(1) as f64;
        self.day_offset as f64 * day as f64 / step
    }
}

pub fn max_count(weeks: &[WeekGroup]) -> u32 {
    weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .map(|d| d.count)
        .max()
        .unwrap_or(0)
}

/// `min + floor(max_height / max * count)`, or just `min` when nothing is active.
pub fn block_height(count: u32, max: u32, config: &LayoutConfig) -> u32 {
    if max == 0 {
        return config.min_height;
    }
    let scaled = (config.max_height as f64 / max as f64) * count as f64;
    config.min_height.saturating_add(scaled.floor() as u32)
}

/// Isometric 3D → 2D, offset by the configured origin.
pub fn project(p: Point3D, config: &LayoutConfig) -> ScreenPoint {
    ScreenPoint {
        x: config.origin_x + (p.x - p.y),
        y: config.origin_y + (p.x + p.y) / 2.0 - p.z,
    }
}

/// One instruction per day, weeks first then days, ready to paint in order.
pub fn layout(weeks: &[WeekGroup], config: &LayoutConfig) -> Vec<RenderInstruction> {
    let max = max_count(weeks);
    let size = config.size as f64;
    let mut out = Vec::with_capacity(weeks.iter().map(|w| w.days.len()).sum());

    for (w, week) in weeks.iter().enumerate() {
        let gx = config.column(w as u32);
        for (d, day) in week.days.iter().enumerate() {
            let gy = config.row(d as u32);
            let position = Point3D {
                x: size * gx,
                y: size * gy,
                z: 0.0,
            };
            out.push(RenderInstruction {
                grid: GridIndex {
                    week: w as u32,
                    day: d as u32,
                },
                position,
                screen: project(position, config),
                dimension: Dimension {
                    width: config.size,
                    depth: config.size,
                    height: block_height(day.count, max, config),
                },
                color: day.color,
            });
        }
    }

    debug!("Laid out {} blocks (max count {})", out.len(), max);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::aggregate::group_weeks;
    use crate::models::DayRecord;
    use chrono::{Duration, NaiveDate};

    fn weeks_from(counts: &[u32]) -> Vec<WeekGroup> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let days: Vec<DayRecord> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DayRecord {
                date: start + Duration::days(i as i64),
                week_index: (i / 7) as u32,
                color: 0x216E39 + i as u32,
                count,
            })
            .collect();
        group_weeks(&days)
    }

    #[test]
    fn heights_are_min_when_nothing_active() {
        let cfg = LayoutConfig::default();
        let blocks = layout(&weeks_from(&[0, 0, 0, 0]), &cfg);
        assert!(blocks.iter().all(|b| b.dimension.height == MIN_HEIGHT));
    }

    #[test]
    fn height_scales_against_max() {
        let cfg = LayoutConfig::default();
        assert_eq!(block_height(5, 10, &cfg), 53);
        assert_eq!(block_height(10, 10, &cfg), 103);
        assert_eq!(block_height(0, 10, &cfg), 3);
        // 100 / 3 * 1 = 33.33.. floors to 33
        assert_eq!(block_height(1, 3, &cfg), 36);
    }

    #[test]
    fn oversized_heights_saturate() {
        let cfg = LayoutConfig {
            max_height: u32::MAX,
            min_height: u32::MAX - 1,
            ..LayoutConfig::default()
        };
        assert_eq!(block_height(10, 10, &cfg), u32::MAX);
        assert_eq!(block_height(0, 10, &cfg), u32::MAX - 1);
    }

    #[test]
    fn emits_week_then_day_order() {
        let cfg = LayoutConfig::default();
        let blocks = layout(&weeks_from(&[1; 10]), &cfg);
        assert_eq!(blocks.len(), 10);
        let grid: Vec<(u32, u32)> = blocks.iter().map(|b| (b.grid.week, b.grid.day)).collect();
        assert_eq!(grid[0], (0, 0));
        assert_eq!(grid[6], (0, 6));
        assert_eq!(grid[7], (1, 0));
        assert_eq!(grid[9], (1, 2));
    }

    #[test]
    fn footprint_and_color_come_through() {
        let cfg = LayoutConfig::default();
        let blocks = layout(&weeks_from(&[4, 2]), &cfg);
        assert_eq!(blocks[1].dimension.width, SIZE);
        assert_eq!(blocks[1].dimension.depth, SIZE);
        assert_eq!(blocks[1].dimension.height, 3 + 50);
        assert_eq!(blocks[1].color, 0x216E3A);
    }

    #[test]
    fn positions_follow_calendar_spacing() {
        let cfg = LayoutConfig::default();
        let blocks = layout(&weeks_from(&[1; 8]), &cfg);

        // first week sits at 14/15 of a column, first day at row 0
        let first = blocks[0].position;
        assert!((first.x - 16.0 * 14.0 / 15.0).abs() < 1e-9);
        assert_eq!(first.y, 0.0);
        assert_eq!(first.z, 0.0);

        let second_day = blocks[1].position;
        assert!((second_day.y - 16.0 * 13.0 / 14.0).abs() < 1e-9);

        let next_week = blocks[7].position;
        assert!((next_week.x - 16.0 * 28.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn projection_uses_origin() {
        let cfg = LayoutConfig::default();
        let p = project(Point3D { x: 32.0, y: 16.0, z: 0.0 }, &cfg);
        assert_eq!(p.x, 130.0 + 16.0);
        assert_eq!(p.y, 90.0 + 24.0);

        let raised = project(Point3D { x: 0.0, y: 0.0, z: 10.0 }, &cfg);
        assert_eq!(raised.y, 80.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let cfg = LayoutConfig::default();
        let weeks = weeks_from(&[3, 0, 9, 1, 1, 0, 2, 5, 8, 13]);
        let a = serde_json::to_string(&layout(&weeks, &cfg)).unwrap();
        let b = serde_json::to_string(&layout(&weeks, &cfg)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_weeks_emit_nothing() {
        assert!(layout(&[], &LayoutConfig::default()).is_empty());
    }
}
