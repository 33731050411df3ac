//! Human-readable labels for a [`StatisticsSummary`].

use serde::Serialize;

use crate::models::{StatisticsSummary, Streak};
use crate::utils::format::{
    format_date_range, format_days, format_number, format_short_date, pad_right,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayRow {
    pub label: &'static str,
    pub value: String,
    pub detail: Option<String>,
}

impl OverlayRow {
    fn new(label: &'static str, value: String, detail: Option<String>) -> Self {
        Self {
            label,
            value,
            detail,
        }
    }
}

fn streak_row(label: &'static str, streak: &Streak, empty: &str) -> OverlayRow {
    match (streak.start, streak.end) {
        (Some(start), Some(end)) if !streak.is_empty() => OverlayRow::new(
            label,
            format_days(streak.length),
            Some(format_date_range(start, end)),
        ),
        _ => OverlayRow::new(label, empty.to_string(), None),
    }
}

pub fn labels(summary: &StatisticsSummary) -> Vec<OverlayRow> {
    if !summary.has_data() {
        return vec![OverlayRow::new("Contributions", "No data".to_string(), None)];
    }

    let range = match (summary.first_date, summary.last_date) {
        (Some(a), Some(b)) => Some(format_date_range(a, b)),
        _ => None,
    };
    let mut rows = vec![OverlayRow::new(
        "Contributions",
        format!("{} total", format_number(summary.total_count)),
        range,
    )];

    if let Some(week) = &summary.current_week {
        rows.push(OverlayRow::new(
            "This week",
            format!("{} total", format_number(week.total)),
            Some(format_date_range(week.start, week.end)),
        ));
    }

    rows.push(match &summary.best_day {
        Some(best) => OverlayRow::new(
            "Best day",
            format_number(best.count as u64),
            Some(format_short_date(best.date)),
        ),
        None => OverlayRow::new("Best day", "No activity found".to_string(), None),
    });

    rows.push(OverlayRow::new(
        "Average",
        match summary.average_per_day {
            Some(avg) => format!("{:.2} per day", avg),
            None => "n/a".to_string(),
        },
        None,
    ));

    rows.push(streak_row(
        "Longest streak",
        &summary.longest_streak,
        "No longest streak",
    ));
    rows.push(streak_row(
        "Current streak",
        &summary.current_streak,
        "No current streak",
    ));
    rows
}

/// Aligned plain-text block, one row per line.
pub fn render_text(rows: &[OverlayRow]) -> String {
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0) + 2;
    let value_width = rows
        .iter()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.value.as_str()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for row in rows {
        let line = match &row.detail {
            Some(detail) => format!(
                "{}{}{}",
                pad_right(row.label, label_width),
                pad_right(&row.value, value_width),
                detail
            ),
            None => format!("{}{}", pad_right(row.label, label_width), row.value),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
