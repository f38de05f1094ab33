//! Text helpers for milestone titles and share messages.

use chrono::{Datelike, NaiveDate};
use shared::Milestone;

/// English ordinal suffix: 1st, 2nd, 3rd, 4th... with 11th, 12th, 13th
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// "10,000 Days" (or "1 Day")
pub fn day_count_title(days: u64) -> String {
    if days == 1 {
        "1 Day".to_string()
    } else {
        format!("{} Days", group_thousands(days))
    }
}

/// Math values read better without separators: "3141 Days"
pub fn math_title(days: u64) -> String {
    format!("{} Days", days)
}

pub fn hours_title(hours: u64) -> String {
    format!("{} Hours", group_thousands(hours))
}

pub fn weeks_title(weeks: u64) -> String {
    format!("{} Weeks", group_thousands(weeks))
}

pub fn months_title(months: u64) -> String {
    format!("{} Months", group_thousands(months))
}

/// "10M Minutes"
pub fn minutes_title(minutes: u64) -> String {
    format!("{}M Minutes", minutes as f64 / 1_000_000.0)
}

/// "1.5 Billion Seconds"
pub fn seconds_title(seconds: u64) -> String {
    format!("{} Billion Seconds", seconds as f64 / 1_000_000_000.0)
}

/// "21st Birthday"
pub fn birthday_title(age: u32) -> String {
    format!("{} Birthday", ordinal(age))
}

/// "Jun 15th, 2020"
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), ordinal(date.day()), date.year())
}

/// "June 15th, 2020"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), ordinal(date.day()), date.year())
}

/// Message offered when sharing an upcoming milestone
pub fn share_text(milestone: &Milestone) -> String {
    format!(
        "I'm hitting a major milestone: {} on {}! ({})",
        milestone.title,
        format_short_date(milestone.date.date()),
        milestone.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MilestoneCategory, MilestoneUnit};

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (100, "100th"),
            (101, "101st"),
            (111, "111th"),
            (112, "112th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(36_500), "36,500");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_titles() {
        assert_eq!(day_count_title(10_000), "10,000 Days");
        assert_eq!(day_count_title(1), "1 Day");
        assert_eq!(math_title(3_141), "3141 Days");
        assert_eq!(hours_title(250_000), "250,000 Hours");
        assert_eq!(weeks_title(1_500), "1,500 Weeks");
        assert_eq!(months_title(1_200), "1,200 Months");
        assert_eq!(minutes_title(10_000_000), "10M Minutes");
        assert_eq!(seconds_title(1_500_000_000), "1.5 Billion Seconds");
        assert_eq!(seconds_title(2_000_000_000), "2 Billion Seconds");
        assert_eq!(birthday_title(21), "21st Birthday");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        assert_eq!(format_short_date(date), "Jun 15th, 2020");
        assert_eq!(format_long_date(date), "June 15th, 2020");
        let date = NaiveDate::from_ymd_opt(2017, 5, 22).unwrap();
        assert_eq!(format_long_date(date), "May 22nd, 2017");
    }

    #[test]
    fn test_share_text() {
        let milestone = Milestone {
            id: "Birth-Power-10000-days".to_string(),
            value: 10_000,
            unit: MilestoneUnit::Days,
            date: NaiveDate::from_ymd_opt(2017, 5, 19).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            category: MilestoneCategory::Power,
            title: "10,000 Days".to_string(),
            description: "The 10k Club!".to_string(),
            is_past: true,
            color: "#3b82f6".to_string(),
            source_event_name: "Birth".to_string(),
        };
        assert_eq!(
            share_text(&milestone),
            "I'm hitting a major milestone: 10,000 Days on May 19th, 2017! (The 10k Club!)"
        );
    }
}
