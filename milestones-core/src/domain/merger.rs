//! Milestone generation across every origin.
//!
//! The birth origin is assembled first, then each custom event in input order.
//! Custom-event milestones are copies retagged to the `Custom` category (color
//! and description follow) while `source_event_name` keeps the event name.
//! The concatenation is stably sorted by date; nothing is de-duplicated, two
//! origins landing on the same date give two milestones.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use shared::{CustomEvent, GenerateMilestonesRequest, Milestone, MilestoneCategory, BIRTH_LABEL};

use super::assembler::MilestoneAssembler;
use super::descriptions::{DescriptionTable, STANDARD_DESCRIPTIONS};
use super::models::Origin;
use super::palette::CategoryPalette;

/// Service that turns a profile plus custom events into the full milestone list
#[derive(Clone)]
pub struct MilestoneService {
    palette: CategoryPalette,
    descriptions: &'static DescriptionTable,
}

impl MilestoneService {
    /// Create a MilestoneService with the default palette
    pub fn new() -> Self {
        Self::with_palette(CategoryPalette::default())
    }

    /// Create a MilestoneService with a custom palette
    pub fn with_palette(palette: CategoryPalette) -> Self {
        Self {
            palette,
            descriptions: &STANDARD_DESCRIPTIONS,
        }
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Generate milestones, judging `is_past` against the local wall clock
    pub fn generate(&self, request: &GenerateMilestonesRequest) -> Vec<Milestone> {
        self.generate_at(request, Local::now().naive_local())
    }

    /// Generate milestones as of `now`.
    ///
    /// An absent or unparseable birth date yields an empty list. A custom event
    /// with a bad date is skipped without affecting the other origins.
    pub fn generate_at(&self, request: &GenerateMilestonesRequest, now: NaiveDateTime) -> Vec<Milestone> {
        let label = request.origin_label.as_deref().unwrap_or(BIRTH_LABEL);

        let birth = match Origin::from_parts(
            label,
            request.date_of_birth.as_deref(),
            request.time_of_birth.as_deref(),
        ) {
            Ok(origin) => origin,
            Err(e) => {
                warn!("No milestones generated: {}", e);
                return Vec::new();
            }
        };

        let mut milestones = self.generate_for_origin(&birth, now);
        let mut used_labels: HashSet<String> = HashSet::new();
        used_labels.insert(birth.label.clone());
        let mut origin_count = 1;

        for event in &request.custom_events {
            let origin = match self.custom_event_origin(event, &used_labels) {
                Some(origin) => origin,
                None => continue,
            };
            used_labels.insert(origin.label.clone());
            origin_count += 1;

            let batch = self.generate_for_origin(&origin, now);
            debug!("Custom event '{}' contributed {} milestones", event.name, batch.len());
            milestones.extend(batch.iter().map(|m| self.retag_custom(m, &event.name)));
        }

        milestones.sort_by_key(|m| m.date);

        info!(
            "Generated {} milestones from {} origin(s)",
            milestones.len(),
            origin_count
        );
        milestones
    }

    /// Milestones measured from a single origin, untouched by custom retagging
    pub fn generate_for_origin(&self, origin: &Origin, now: NaiveDateTime) -> Vec<Milestone> {
        MilestoneAssembler::new(&self.palette, self.descriptions).assemble(origin, now)
    }

    /// Origin for a custom event at midnight, or `None` if its date is unusable
    fn custom_event_origin(&self, event: &CustomEvent, used_labels: &HashSet<String>) -> Option<Origin> {
        let origin = match Origin::from_parts(&event.name, Some(&event.date), None) {
            Ok(origin) => origin,
            Err(e) => {
                warn!("Skipping custom event '{}' ({}): {}", event.name, event.id, e);
                return None;
            }
        };

        if used_labels.contains(&event.name) {
            let prefix = format!("{}~{}", event.name, event.id);
            debug!("Label '{}' already used, custom event IDs prefixed with '{}'", event.name, prefix);
            return Some(origin.with_id_prefix(prefix));
        }
        Some(origin)
    }

    /// Copy of `milestone` shown under the Custom category
    fn retag_custom(&self, milestone: &Milestone, event_name: &str) -> Milestone {
        Milestone {
            category: MilestoneCategory::Custom,
            color: self.palette.color_for(MilestoneCategory::Custom).to_string(),
            description: format!("{} (since {})", milestone.description, event_name),
            ..milestone.clone()
        }
    }
}

impl Default for MilestoneService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::CustomEventCategory;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn event(id: &str, name: &str, date: &str) -> CustomEvent {
        CustomEvent {
            id: id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            category: CustomEventCategory::Career,
        }
    }

    fn request(dob: Option<&str>, events: Vec<CustomEvent>) -> GenerateMilestonesRequest {
        GenerateMilestonesRequest {
            origin_label: None,
            date_of_birth: dob.map(str::to_string),
            time_of_birth: None,
            custom_events: events,
        }
    }

    #[test]
    fn test_missing_birth_date_yields_nothing() {
        let service = MilestoneService::new();
        assert!(service.generate_at(&request(None, vec![]), now()).is_empty());
        assert!(service.generate_at(&request(Some("garbage"), vec![]), now()).is_empty());

        // Custom events alone do not produce milestones
        let events = vec![event("1", "Graduation", "2020-06-15")];
        assert!(service.generate_at(&request(None, events), now()).is_empty());
    }

    #[test]
    fn test_custom_event_retagging() {
        let service = MilestoneService::new();
        let events = vec![event("1", "Graduation", "2020-06-15")];
        let milestones = service.generate_at(&request(Some("2000-06-15"), events), now());

        let custom: Vec<&Milestone> = milestones
            .iter()
            .filter(|m| m.source_event_name == "Graduation")
            .collect();
        assert_eq!(custom.len(), 275);
        for m in &custom {
            assert_eq!(m.category, MilestoneCategory::Custom);
            assert_eq!(m.color, "#eab308");
            assert!(m.description.ends_with(" (since Graduation)"));
            assert!(m.id.starts_with("Graduation-"));
        }

        let power = custom.iter().find(|m| m.id == "Graduation-Power-1000-days").unwrap();
        assert_eq!(
            power.description,
            "The Kilo-day! You've hit four digits (approx 2.7 years). Walking and talking like a pro. (since Graduation)"
        );
        assert_eq!(power.date, NaiveDate::from_ymd_opt(2023, 3, 12).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_bad_custom_event_does_not_block_others() {
        let service = MilestoneService::new();
        let events = vec![
            event("1", "Broken", "someday"),
            event("2", "Wedding", "2015-09-12"),
        ];
        let milestones = service.generate_at(&request(Some("1990-01-01"), events), now());

        assert!(milestones.iter().all(|m| m.source_event_name != "Broken"));
        assert_eq!(milestones.iter().filter(|m| m.source_event_name == "Wedding").count(), 275);
        assert_eq!(milestones.iter().filter(|m| m.is_from_birth()).count(), 275);
    }

    #[test]
    fn test_duplicate_event_names_get_distinct_ids() {
        let service = MilestoneService::new();
        let events = vec![
            event("a1", "Move", "2010-01-01"),
            event("b2", "Move", "2012-01-01"),
            event("c3", "Birth", "2014-01-01"),
        ];
        let milestones = service.generate_at(&request(Some("1990-01-01"), events), now());

        let ids: HashSet<&str> = milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), milestones.len());
        assert!(ids.contains("Move-Power-100-days"));
        assert!(ids.contains("Move~b2-Power-100-days"));
        assert!(ids.contains("Birth~c3-Power-100-days"));
    }

    #[test]
    fn test_custom_palette_is_used() {
        let mut overrides = std::collections::HashMap::new();
        overrides.insert("Custom".to_string(), "#000000".to_string());
        overrides.insert("Power".to_string(), "#111111".to_string());
        let palette = CategoryPalette::default().with_overrides(&overrides).unwrap();
        let service = MilestoneService::with_palette(palette);

        let events = vec![event("1", "Graduation", "2020-06-15")];
        let milestones = service.generate_at(&request(Some("2000-06-15"), events), now());
        for m in &milestones {
            match (m.category, m.is_from_birth()) {
                (MilestoneCategory::Custom, _) => assert_eq!(m.color, "#000000"),
                (MilestoneCategory::Power, true) => assert_eq!(m.color, "#111111"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_origin_label_override() {
        let service = MilestoneService::new();
        let mut req = request(Some("1990-01-01"), vec![]);
        req.origin_label = Some("Adoption".to_string());
        let milestones = service.generate_at(&req, now());
        assert!(milestones.iter().all(|m| m.source_event_name == "Adoption"));
        assert!(milestones.iter().all(|m| m.category != MilestoneCategory::Custom));
    }
}
