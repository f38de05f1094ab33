//! Read-only views over a generated milestone list.
//!
//! These mirror what the dashboard and list screens show. They never
//! regenerate anything; `is_past` filters use the snapshot stored on each
//! milestone, while the time-window views take `now` explicitly.

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use shared::{Milestone, MilestoneFilter, TimeFilter};

/// Window used by [`around`] on both sides of now
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Number of entries the recent highlights view shows
pub const RECENT_HIGHLIGHTS_LIMIT: usize = 5;

/// Apply a time and category filter, keeping order
pub fn filter_milestones<'a>(milestones: &'a [Milestone], filter: &MilestoneFilter) -> Vec<&'a Milestone> {
    milestones
        .iter()
        .filter(|m| match filter.time {
            TimeFilter::All => true,
            TimeFilter::Future => !m.is_past,
            TimeFilter::Past => m.is_past,
        })
        .filter(|m| filter.category.map_or(true, |c| m.category == c))
        .collect()
}

/// Up to `limit` future milestones, soonest first
pub fn upcoming(milestones: &[Milestone], limit: usize) -> Vec<&Milestone> {
    let mut future: Vec<&Milestone> = milestones.iter().filter(|m| !m.is_past).collect();
    future.sort_by_key(|m| m.date);
    future.truncate(limit);
    future
}

/// The next milestone still ahead
pub fn next_milestone(milestones: &[Milestone]) -> Option<&Milestone> {
    upcoming(milestones, 1).into_iter().next()
}

/// Milestones dated within calendar year `year`
pub fn in_year(milestones: &[Milestone], year: i32) -> Vec<&Milestone> {
    milestones.iter().filter(|m| m.date.year() == year).collect()
}

/// Up to `limit` recent and imminent milestones, closest to `now` first.
///
/// Keeps milestones dated after `now - 30 days` that are either past or less
/// than 30 days ahead.
pub fn around(milestones: &[Milestone], now: NaiveDateTime, limit: usize) -> Vec<&Milestone> {
    let window = TimeDelta::days(RECENT_WINDOW_DAYS);
    let earliest = now - window;

    let mut nearby: Vec<&Milestone> = milestones
        .iter()
        .filter(|m| m.date > earliest)
        .filter(|m| m.is_past || m.date - now < window)
        .collect();
    nearby.sort_by_key(|m| (m.date - now).abs());
    nearby.truncate(limit);
    nearby
}
