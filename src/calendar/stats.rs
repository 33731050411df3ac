use chrono::NaiveDate;
use log::debug;

use crate::models::{BestDay, CurrentWeek, DayRecord, StatisticsSummary, Streak, WeekGroup};

/// Compute the full summary from date-sorted days and their week groups.
pub fn summarize(days: &[DayRecord], weeks: &[WeekGroup]) -> StatisticsSummary {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        debug!("No days supplied, returning empty summary");
        return StatisticsSummary::default();
    };

    let total_count = total(days);
    StatisticsSummary {
        total_count,
        best_day: best_day(days),
        current_week: current_week(weeks),
        average_per_day: average_per_day(total_count, first.date, last.date),
        longest_streak: longest_streak(days),
        current_streak: current_streak(days),
        first_date: Some(first.date),
        last_date: Some(last.date),
    }
}

pub fn total(days: &[DayRecord]) -> u64 {
    days.iter().map(|d| d.count as u64).sum()
}

/// Highest count, first occurrence on ties. `None` when nothing is above 0.
pub fn best_day(days: &[DayRecord]) -> Option<BestDay> {
    let mut best: Option<BestDay> = None;
    for d in days {
        if d.count > best.map(|b| b.count).unwrap_or(0) {
            best = Some(BestDay {
                date: d.date,
                count: d.count,
            });
        }
    }
    best
}

/// Average over the whole days between first and last date, two decimals.
pub fn average_per_day(total: u64, first: NaiveDate, last: NaiveDate) -> Option<f64> {
    let span = (last - first).num_days();
    if span <= 0 {
        return None;
    }
    let avg = total as f64 / span as f64;
    Some((avg * 100.0).round() / 100.0)
}

pub fn current_week(weeks: &[WeekGroup]) -> Option<CurrentWeek> {
    let week = weeks.last()?;
    Some(CurrentWeek {
        start: week.first_date()?,
        end: week.last_date()?,
        total: week.total(),
    })
}

/// Longest run of active days. On ties the most recent run wins.
pub fn longest_streak(days: &[DayRecord]) -> Streak {
    let mut longest = Streak::default();
    let mut running = 0u32;
    let mut running_start: Option<NaiveDate> = None;

    for d in days {
        if d.count == 0 {
            running = 0;
            running_start = None;
            continue;
        }
        running += 1;
        let start = *running_start.get_or_insert(d.date);
        if running >= longest.length {
            longest = Streak {
                length: running,
                start: Some(start),
                end: Some(d.date),
            };
        }
    }
    longest
}

/// Active run ending at the most recent day. A single trailing inactive day
/// is skipped, since today may simply not have data yet.
pub fn current_streak(days: &[DayRecord]) -> Streak {
    let Some(last) = days.last() else {
        return Streak::default();
    };
    let anchor = if last.count > 0 {
        days.len() - 1
    } else if days.len() >= 2 {
        days.len() - 2
    } else {
        return Streak::default();
    };

    let run: Vec<&DayRecord> = days[..=anchor]
        .iter()
        .rev()
        .take_while(|d| d.count > 0)
        .collect();

    match (run.last(), run.first()) {
        (Some(earliest), Some(latest)) => Streak {
            length: run.len() as u32,
            start: Some(earliest.date),
            end: Some(latest.date),
        },
        _ => Streak::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::aggregate::group_weeks;
    use chrono::Duration;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
    }

    /// Consecutive days from `start()`, seven per week.
    fn days_from(counts: &[u32]) -> Vec<DayRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DayRecord {
                date: start() + Duration::days(i as i64),
                week_index: (i / 7) as u32,
                color: 0,
                count,
            })
            .collect()
    }

    fn run(counts: &[u32]) -> StatisticsSummary {
        let days = days_from(counts);
        let weeks = group_weeks(&days);
        summarize(&days, &weeks)
    }

    fn day(i: i64) -> Option<NaiveDate> {
        Some(start() + Duration::days(i))
    }

    #[test]
    fn empty_input_reports_no_data() {
        let s = run(&[]);
        assert!(!s.has_data());
        assert_eq!(s.total_count, 0);
        assert!(s.best_day.is_none());
        assert!(s.current_week.is_none());
        assert!(s.average_per_day.is_none());
        assert!(s.longest_streak.is_empty());
        assert!(s.current_streak.is_empty());
    }

    #[test]
    fn total_is_sum_of_counts() {
        let counts = [3, 0, 7, 1, 0, 12, 4, 4];
        let s = run(&counts);
        assert_eq!(s.total_count, counts.iter().map(|&c| c as u64).sum::<u64>());
    }

    #[test]
    fn best_day_first_occurrence_wins() {
        let s = run(&[1, 5, 2, 5, 0]);
        assert_eq!(
            s.best_day,
            Some(BestDay {
                date: start() + Duration::days(1),
                count: 5
            })
        );
    }

    #[test]
    fn all_zero_means_no_activity() {
        let s = run(&[0, 0, 0, 0]);
        assert!(s.has_data());
        assert!(s.best_day.is_none());
        assert_eq!(s.longest_streak, Streak::default());
        assert_eq!(s.current_streak, Streak::default());
        assert_eq!(s.longest_streak.start, None);
        assert_eq!(s.current_streak.end, None);
    }

    #[test]
    fn longest_streak_prefers_most_recent_tie() {
        let s = run(&[1, 1, 0, 1, 1]);
        assert_eq!(
            s.longest_streak,
            Streak {
                length: 2,
                start: day(3),
                end: day(4)
            }
        );
    }

    #[test]
    fn longest_streak_keeps_strictly_longer_earlier_run() {
        let s = run(&[1, 1, 1, 0, 1, 1]);
        assert_eq!(s.longest_streak.length, 3);
        assert_eq!(s.longest_streak.start, day(0));
        assert_eq!(s.longest_streak.end, day(2));
    }

    #[test]
    fn current_streak_skips_one_trailing_zero() {
        let s = run(&[0, 2, 4, 3, 0]);
        assert_eq!(
            s.current_streak,
            Streak {
                length: 3,
                start: day(1),
                end: day(3)
            }
        );
    }

    #[test]
    fn current_streak_ends_today_when_active() {
        let s = run(&[1, 0, 2, 2]);
        assert_eq!(s.current_streak.length, 2);
        assert_eq!(s.current_streak.start, day(2));
        assert_eq!(s.current_streak.end, day(3));
    }

    #[test]
    fn two_trailing_zeros_break_current_streak() {
        let s = run(&[5, 5, 0, 0]);
        assert!(s.current_streak.is_empty());
        assert_eq!(s.longest_streak.length, 2);
    }

    #[test]
    fn single_inactive_day_has_no_current_streak() {
        let s = run(&[0]);
        assert!(s.current_streak.is_empty());
    }

    #[test]
    fn current_streak_runs_to_sequence_start() {
        let s = run(&[2, 2, 2]);
        assert_eq!(s.current_streak.length, 3);
        assert_eq!(s.current_streak.start, day(0));
    }

    #[test]
    fn average_over_ten_day_span() {
        // 11 consecutive days span 10 days
        let mut counts = vec![2; 10];
        counts.push(0);
        let s = run(&counts);
        assert_eq!(s.total_count, 20);
        assert_eq!(s.average_per_day, Some(2.0));
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let first = start();
        let last = first + Duration::days(3);
        assert_eq!(average_per_day(10, first, last), Some(3.33));
    }

    #[test]
    fn single_day_average_is_undefined() {
        let s = run(&[9]);
        assert_eq!(s.average_per_day, None);
    }

    #[test]
    fn current_week_is_last_group() {
        // 9 days: week 0 has 7, week 1 has 2 (partial)
        let s = run(&[1, 1, 1, 1, 1, 1, 1, 4, 6]);
        let week = s.current_week.unwrap();
        assert_eq!(week.total, 10);
        assert_eq!(Some(week.start), day(7));
        assert_eq!(Some(week.end), day(8));
    }
}
