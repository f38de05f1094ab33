//! Current age statistics and the birthday countdown.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use shared::{AgeStats, BirthdayCountdown};

/// Whole units elapsed from `origin` to `now`.
///
/// Months are calendar months: a month only counts once the same day of
/// month (and time) has been reached. Values are negative if `now` precedes
/// the origin.
pub fn age_stats(origin: NaiveDateTime, now: NaiveDateTime) -> AgeStats {
    let elapsed = now - origin;
    AgeStats {
        months: whole_months_between(origin, now),
        weeks: elapsed.num_weeks(),
        days: elapsed.num_days(),
        hours: elapsed.num_hours(),
        minutes: elapsed.num_minutes(),
        seconds: elapsed.num_seconds(),
    }
}

fn whole_months_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    if to < from {
        return -whole_months_between(to, from);
    }
    let mut months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    let reached = u32::try_from(months)
        .ok()
        .and_then(|m| from.checked_add_months(Months::new(m)))
        .map_or(false, |anniversary| anniversary <= to);
    if !reached {
        months -= 1;
    }
    months.max(0)
}

/// Birthday of someone born on `dob` falling in `year`.
///
/// Feb 29 birthdays fall on Feb 28 in non-leap years.
pub fn birthday_in_year(dob: NaiveDate, year: i32) -> Option<NaiveDate> {
    let years = u32::try_from(year - dob.year()).ok()?;
    dob.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Countdown to the next birthday on or after `today`
pub fn birthday_countdown(dob: NaiveDate, today: NaiveDate) -> Option<BirthdayCountdown> {
    let mut next = birthday_in_year(dob, today.year().max(dob.year()))?;
    if next < today {
        next = birthday_in_year(dob, next.year() + 1)?;
    }
    Some(BirthdayCountdown {
        next_birthday: next,
        turning_age: next.year() - dob.year(),
        days_left: (next - today).num_days(),
    })
}
