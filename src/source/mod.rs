use std::io::Read;
use std::path::Path;

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::calendar::{group_weeks, join_days};
use crate::error::IsocalError;
use crate::models::{DayRecord, RawAnnotation, RawDay, WeekGroup};

/// Raw calendar as captured by whatever scraped it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub days: Vec<RawDay>,
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
}

/// Joined, sorted and grouped calendar.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    pub days: Vec<DayRecord>,
    pub weeks: Vec<WeekGroup>,
}

impl Snapshot {
    pub fn into_calendar(self) -> Calendar {
        let days = join_days(&self.days, &self.annotations);
        let weeks = group_weeks(&days);
        Calendar { days, weeks }
    }
}

/// Read a snapshot from `path`, or stdin when `path` is `-`.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let unavailable = |reason: String| IsocalError::SourceUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| unavailable(e.to_string()))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?
    };

    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))?;
    info!(
        "Loaded {} day cells and {} annotations from {:?}",
        snapshot.days.len(),
        snapshot.annotations.len(),
        path
    );
    Ok(snapshot)
}

pub fn load_calendar(path: &Path) -> Result<Calendar> {
    Ok(load_snapshot(path)?.into_calendar())
}
