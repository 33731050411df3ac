use std::collections::HashMap;

use log::{debug, warn};

use crate::decode::{decode_raw, extract_count};
use crate::models::{DayRecord, RawAnnotation, RawDay, WeekGroup};

/// Join annotations onto day cells by key and sort by date.
///
/// Days without an annotation get a count of 0. When two cells share a date
/// only the first one survives.
pub fn join_days(days: &[RawDay], annotations: &[RawAnnotation]) -> Vec<DayRecord> {
    let mut counts: HashMap<&str, u32> = HashMap::with_capacity(annotations.len());
    for a in annotations {
        if counts.contains_key(a.key.as_str()) {
            warn!("Duplicate annotation key {:?}, keeping the first", a.key);
            continue;
        }
        counts.insert(a.key.as_str(), extract_count(&a.text));
    }

    let mut merged: Vec<DayRecord> = days
        .iter()
        .map(|d| {
            let count = counts.get(d.key.as_str()).copied().unwrap_or_else(|| {
                debug!("No annotation for {} (key {:?})", d.date, d.key);
                0
            });
            DayRecord {
                date: d.date,
                week_index: d.week,
                color: decode_raw(&d.color),
                count,
            }
        })
        .collect();

    // sort_by_key is stable, so equal dates keep source order
    merged.sort_by_key(|d| d.date);
    let before = merged.len();
    merged.dedup_by_key(|d| d.date);
    if merged.len() != before {
        warn!("Dropped {} duplicate day(s)", before - merged.len());
    }
    merged
}

/// Bucket sorted days by week index, weeks in first-seen order.
pub fn group_weeks(days: &[DayRecord]) -> Vec<WeekGroup> {
    let mut slots: HashMap<u32, usize> = HashMap::new();
    let mut weeks: Vec<WeekGroup> = Vec::new();

    for day in days {
        let slot = *slots.entry(day.week_index).or_insert_with(|| {
            weeks.push(WeekGroup {
                week_index: day.week_index,
                days: Vec::with_capacity(7),
            });
            weeks.len() - 1
        });
        weeks[slot].days.push(day.clone());
    }
    weeks
}
