//! Milestone assembly for a single origin.
//!
//! Runs every catalog against the 100-year horizon, projects each value onto
//! the calendar and builds fully populated [`Milestone`] records. Families are
//! processed in a fixed order (Power, Standard, Repdigit, Sequence, Math,
//! Hourly, Weeks, Months, Minutes, Seconds, Birthday) and the result is
//! stably sorted by date, so equal dates keep that family order.

use chrono::NaiveDateTime;
use log::debug;
use shared::{Milestone, MilestoneCategory, MilestoneUnit};

use super::catalogs::{self, MathEntry};
use super::descriptions::DescriptionTable;
use super::formatting;
use super::models::Origin;
use super::palette::CategoryPalette;
use super::projector;

/// Builds the milestone set for one origin
pub struct MilestoneAssembler<'a> {
    palette: &'a CategoryPalette,
    descriptions: &'a DescriptionTable,
}

/// Everything about a milestone except where and when it lands
struct Draft {
    id_suffix: String,
    value: u64,
    unit: MilestoneUnit,
    category: MilestoneCategory,
    title: String,
    description: String,
}

impl<'a> MilestoneAssembler<'a> {
    pub fn new(palette: &'a CategoryPalette, descriptions: &'a DescriptionTable) -> Self {
        Self { palette, descriptions }
    }

    /// All milestones measured from `origin`, ascending by date.
    ///
    /// `now` decides `is_past` and is not used for anything else.
    pub fn assemble(&self, origin: &Origin, now: NaiveDateTime) -> Vec<Milestone> {
        let mut milestones: Vec<Milestone> = self
            .drafts()
            .into_iter()
            .filter_map(|draft| self.build(origin, now, draft))
            .collect();

        milestones.sort_by_key(|m| m.date);

        debug!(
            "Assembled {} milestones for origin '{}' starting {}",
            milestones.len(),
            origin.label,
            origin.start
        );
        milestones
    }

    fn build(&self, origin: &Origin, now: NaiveDateTime, draft: Draft) -> Option<Milestone> {
        let date = match projector::project(origin.start, draft.value, draft.unit) {
            Some(date) => date,
            None => {
                debug!(
                    "Skipping {} {} from '{}': date out of range",
                    draft.value, draft.unit, origin.label
                );
                return None;
            }
        };

        Some(Milestone {
            id: format!("{}-{}", origin.id_prefix, draft.id_suffix),
            value: draft.value,
            unit: draft.unit,
            date,
            category: draft.category,
            title: draft.title,
            description: draft.description,
            is_past: date < now,
            color: self.palette.color_for(draft.category).to_string(),
            source_event_name: origin.label.clone(),
        })
    }

    /// Every candidate milestone in family processing order
    fn drafts(&self) -> Vec<Draft> {
        let mut drafts = Vec::new();
        self.day_family_drafts(&mut drafts);
        self.math_drafts(&mut drafts);
        self.time_unit_drafts(&mut drafts);
        self.birthday_drafts(&mut drafts);
        drafts
    }

    fn day_family_drafts(&self, drafts: &mut Vec<Draft>) {
        let bound = catalogs::DAYS_IN_100_YEARS;
        let families = [
            (MilestoneCategory::Power, catalogs::powers_of_ten(bound)),
            (MilestoneCategory::Standard, catalogs::standard_numbers(bound)),
            (MilestoneCategory::Repdigit, catalogs::repdigits(bound)),
            (MilestoneCategory::Sequence, catalogs::sequences(bound)),
        ];

        for (category, values) in families {
            for value in values {
                drafts.push(Draft {
                    id_suffix: format!("{}-{}-days", category, value),
                    value,
                    unit: MilestoneUnit::Days,
                    category,
                    title: formatting::day_count_title(value),
                    description: self.descriptions.describe(category, value),
                });
            }
        }
    }

    fn math_drafts(&self, drafts: &mut Vec<Draft>) {
        for MathEntry { value, kind } in catalogs::math_numbers(catalogs::DAYS_IN_100_YEARS) {
            drafts.push(Draft {
                id_suffix: format!("{}-{}-{}-days", MilestoneCategory::Math, kind.slug(), value),
                value,
                unit: MilestoneUnit::Days,
                category: MilestoneCategory::Math,
                title: formatting::math_title(value),
                description: self.descriptions.describe_math(kind),
            });
        }
    }

    fn time_unit_drafts(&self, drafts: &mut Vec<Draft>) {
        let families: [(MilestoneCategory, MilestoneUnit, Vec<u64>, fn(u64) -> String); 5] = [
            (
                MilestoneCategory::Hourly,
                MilestoneUnit::Hours,
                catalogs::samples_within(&catalogs::HOURLY_SAMPLES, catalogs::HOURS_IN_100_YEARS),
                formatting::hours_title,
            ),
            (
                MilestoneCategory::Weeks,
                MilestoneUnit::Weeks,
                catalogs::weekly_samples(),
                formatting::weeks_title,
            ),
            (
                MilestoneCategory::Months,
                MilestoneUnit::Months,
                catalogs::monthly_samples(),
                formatting::months_title,
            ),
            (
                MilestoneCategory::Minutes,
                MilestoneUnit::Minutes,
                catalogs::samples_within(&catalogs::MINUTE_SAMPLES, catalogs::MINUTES_IN_100_YEARS),
                formatting::minutes_title,
            ),
            (
                MilestoneCategory::Seconds,
                MilestoneUnit::Seconds,
                catalogs::samples_within(&catalogs::SECOND_SAMPLES, catalogs::SECONDS_IN_100_YEARS),
                formatting::seconds_title,
            ),
        ];

        for (category, unit, values, title) in families {
            let id_kind = match category {
                MilestoneCategory::Hourly => "hourly",
                _ => unit.as_str(),
            };
            for value in values {
                drafts.push(Draft {
                    id_suffix: format!("{}-{}", id_kind, value),
                    value,
                    unit,
                    category,
                    title: title(value),
                    description: self.descriptions.describe(category, value),
                });
            }
        }
    }

    fn birthday_drafts(&self, drafts: &mut Vec<Draft>) {
        for age in 1..=catalogs::MAX_YEARS {
            let value = u64::from(age);
            drafts.push(Draft {
                id_suffix: format!("birthday-{}", age),
                value,
                unit: MilestoneUnit::Years,
                category: MilestoneCategory::Birthday,
                title: formatting::birthday_title(age),
                description: self.descriptions.describe(MilestoneCategory::Birthday, value),
            });
        }
    }
}
