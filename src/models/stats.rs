use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestDay {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentWeek {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: u64,
}

/// A run of consecutive active days. `start`/`end` are `None` when `length` is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub length: u32,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Streak {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_count: u64,
    /// `None` when there is no data or every day is zero
    pub best_day: Option<BestDay>,
    pub current_week: Option<CurrentWeek>,
    /// `None` when the observed range spans zero days
    pub average_per_day: Option<f64>,
    pub longest_streak: Streak,
    pub current_streak: Streak,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl StatisticsSummary {
    pub fn has_data(&self) -> bool {
        self.first_date.is_some()
    }
}
