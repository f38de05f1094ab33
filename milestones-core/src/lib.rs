//! Life milestone generation.
//!
//! Computes the dates at which the time elapsed since a birth (or any other
//! event) hits a numerically interesting value: powers of ten, repdigits,
//! digit sequences, pi and Fibonacci numbers, round counts of hours, weeks,
//! months, minutes and seconds, and every birthday up to 100.
//!
//! The presentation layer calls [`generate`] (or [`MilestoneService`]
//! directly) whenever the profile or custom events change and renders the
//! returned list as-is.

pub mod config;
pub mod domain;

pub use domain::{CategoryPalette, MilestoneService, Origin};
pub use shared::{
    CustomEvent, CustomEventCategory, GenerateMilestonesRequest, Milestone, MilestoneCategory,
    MilestoneUnit, BIRTH_LABEL,
};

/// Generate every milestone for an origin and its custom events.
///
/// `origin_date` is "YYYY-MM-DD" and `origin_time` "HH:MM". A missing or
/// unparseable date returns an empty list; a malformed time counts as midnight.
pub fn generate(
    origin_date: Option<&str>,
    origin_time: Option<&str>,
    origin_label: &str,
    custom_events: &[CustomEvent],
) -> Vec<Milestone> {
    let request = GenerateMilestonesRequest {
        origin_label: Some(origin_label.to_string()),
        date_of_birth: origin_date.map(str::to_string),
        time_of_birth: origin_time.map(str::to_string),
        custom_events: custom_events.to_vec(),
    };
    MilestoneService::new().generate(&request)
}
