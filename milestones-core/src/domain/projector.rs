//! Unit projection: turning "N units after the origin" into a calendar instant.
//!
//! Days, weeks, hours, minutes and seconds are fixed-length steps on the
//! local wall clock. Months and years are calendar steps: when the target
//! month is shorter than the origin's day of month, the day is clamped to the
//! last valid day (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).

use chrono::{Months, NaiveDateTime, TimeDelta};
use shared::MilestoneUnit;

/// Add `value` units to `start`.
///
/// Returns `None` only if the result falls outside chrono's representable
/// range, which cannot happen for values inside the 100-year horizon.
pub fn project(start: NaiveDateTime, value: u64, unit: MilestoneUnit) -> Option<NaiveDateTime> {
    let value = i64::try_from(value).ok()?;
    match unit {
        MilestoneUnit::Days => start.checked_add_signed(TimeDelta::try_days(value)?),
        MilestoneUnit::Weeks => start.checked_add_signed(TimeDelta::try_weeks(value)?),
        MilestoneUnit::Hours => start.checked_add_signed(TimeDelta::try_hours(value)?),
        MilestoneUnit::Minutes => start.checked_add_signed(TimeDelta::try_minutes(value)?),
        MilestoneUnit::Seconds => start.checked_add_signed(TimeDelta::try_seconds(value)?),
        MilestoneUnit::Months => add_months(start, value),
        MilestoneUnit::Years => add_months(start, value.checked_mul(12)?),
    }
}

fn add_months(start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let months = u32::try_from(months).ok()?;
    start.checked_add_months(Months::new(months))
}
