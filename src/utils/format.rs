use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// Format an integer with comma thousands separators: 1234567 → "1,234,567"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a NaiveDate to "Mar 3"
pub fn format_short_date(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

/// "Mar 3 → Jun 1"
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} → {}", format_short_date(start), format_short_date(end))
}

/// "1 day", "5 days"
pub fn format_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", format_number(n as u64))
    }
}

/// Pad `s` on the right to `width` terminal columns
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u64, total: u64, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn date_range_uses_short_months() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_date_range(a, b), "Mar 3 → Jun 1");
    }

    #[test]
    fn days_pluralize() {
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(0), "0 days");
        assert_eq!(format_days(1200), "1,200 days");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("→", 3).chars().count(), 3);
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(5, 10, 4), "██░░");
        assert_eq!(progress_bar(20, 10, 4), "████");
    }
}
