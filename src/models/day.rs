use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One calendar day after joining color and count data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub week_index: u32,
    /// Packed 24-bit RGB
    pub color: u32,
    pub count: u32,
}

/// Days sharing one week index, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGroup {
    pub week_index: u32,
    pub days: Vec<DayRecord>,
}

impl WeekGroup {
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.count as u64).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}

/// Color as handed over by the source: either channels or a CSS-ish string.
/// Anything else lands in `Other` and decodes leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    Channels([f64; 3]),
    Text(String),
    Other(serde_json::Value),
}

impl Default for RawColor {
    fn default() -> Self {
        RawColor::Text(String::new())
    }
}

/// Structural record for a day cell, before counts are joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    pub date: NaiveDate,
    pub week: u32,
    #[serde(default)]
    pub color: RawColor,
    /// Join key shared with the matching annotation
    pub key: String,
}

/// Free-text count annotation ("5 contributions on March 3rd").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnotation {
    pub key: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Non-string annotation text reads as empty, which counts as no activity.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
