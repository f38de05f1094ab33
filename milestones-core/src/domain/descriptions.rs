//! Milestone description text.
//!
//! Descriptions are looked up in two tiers: a hand-written line for a few
//! specific `(category, value)` pairs, otherwise the category's default.
//! Math-family text depends on why the value was picked, not on the value,
//! so it is keyed by [`MathKind`] instead.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use shared::MilestoneCategory;

use super::catalogs::MathKind;

/// Shared read-only table with the built-in text
pub static STANDARD_DESCRIPTIONS: Lazy<DescriptionTable> = Lazy::new(DescriptionTable::standard);

/// Fallback text for a category without a specific entry
#[derive(Debug, Clone, Copy)]
pub enum DefaultText {
    Fixed(&'static str),
    /// Built from the value, e.g. "You have lived 1500 weeks."
    PerValue(fn(u64) -> String),
}

impl DefaultText {
    fn render(&self, value: u64) -> String {
        match self {
            DefaultText::Fixed(text) => text.to_string(),
            DefaultText::PerValue(build) => build(value),
        }
    }
}

const GENERIC_DESCRIPTION: &str = "A notable moment in your timeline.";

#[derive(Debug, Clone)]
pub struct DescriptionTable {
    specific: HashMap<(MilestoneCategory, u64), &'static str>,
    defaults: HashMap<MilestoneCategory, DefaultText>,
}

impl DescriptionTable {
    /// An empty table; every lookup yields the generic line
    pub fn new() -> Self {
        Self {
            specific: HashMap::new(),
            defaults: HashMap::new(),
        }
    }

    /// The built-in curated text
    pub fn standard() -> Self {
        use MilestoneCategory::*;

        let mut table = Self::new();

        table.set_default(Power, DefaultText::Fixed("A monumental Power of 10."));
        table.insert(Power, 100, "Your first triple-digit day! The trial period is officially over.");
        table.insert(Power, 1_000, "The Kilo-day! You've hit four digits (approx 2.7 years). Walking and talking like a pro.");
        table.insert(Power, 10_000, "The 10k Club! You've lived 10,000 days – that's roughly 27 years of experience.");
        table.insert(Power, 100_000, "The Centennial of Days. A legendary feat achieved by very few.");

        table.set_default(Standard, DefaultText::Fixed("A nice round number to celebrate."));
        table.insert(Standard, 5_000, "5,000 Days. You're deep into childhood/adolescence (approx 13.6 years).");
        table.insert(Standard, 10_000, "10,000 Days. Welcome to the 5-digit club. You're getting serious now.");
        table.insert(Standard, 15_000, "15,000 Days. You're roughly 41 years young. Wisdom is setting in.");
        table.insert(Standard, 20_000, "20,000 Days. Over 54 years of life lived. A substantial archive of memories.");
        table.insert(Standard, 25_000, "25,000 Days. The Quarter Century of Days (approx 68 years). A golden era.");
        table.insert(Standard, 30_000, "30,000 Days. An incredible 82 years of journeying around the sun.");

        table.set_default(Repdigit, DefaultText::Fixed("A lucky repdigit! All the numbers align."));
        table.insert(Repdigit, 11_111, "The Picket Fence. 11,111 days. Make a big wish on this singular sensation!");
        table.insert(Repdigit, 22_222, "Deuces Wild. 22,222 days. Balance and duality in perfect harmony.");
        table.insert(Repdigit, 33_333, "Threes Company. 33,333 days. A trifecta of luck.");

        table.set_default(Sequence, DefaultText::Fixed("A unique sequential pattern in time."));
        table.insert(Sequence, 12_345, "1-2-3-4-5. The Great Sequence. Life is as easy as counting.");
        table.insert(Sequence, 12_321, "A Palindrome Day. 12,321 reads the same forwards and backwards.");

        table.set_default(Hourly, DefaultText::Fixed("An hourly jubilee."));
        table.insert(Hourly, 10_000, "The Mastery Milestone. 10,000 hours to master a skill—you've mastered existing.");
        table.insert(Hourly, 100_000, "100,000 Hours. Welcome to double-digit age in hours (approx 11.4 years).");
        table.insert(Hourly, 200_000, "200,000 Hours. Breathing for over 22 years. That's a lot of breaths.");
        table.insert(Hourly, 500_000, "Half a Million Hours. You are a chrononaut of the highest order (approx 57 years).");

        table.set_default(Weeks, DefaultText::PerValue(|weeks| format!("You have lived {} weeks.", weeks)));
        table.insert(Weeks, 1_000, "1,000 Weeks. Approx 19 years old. Childhood officially complete.");
        table.insert(Weeks, 2_000, "2,000 Weeks. Approx 38 years. Approaching the prime of life.");
        table.insert(Weeks, 3_000, "3,000 Weeks. Approx 57 years. A wealth of weekly wisdom.");
        table.insert(Weeks, 4_000, "4,000 Weeks. Approx 76 years. Four thousand weekends experienced.");

        table.set_default(Months, DefaultText::Fixed("A massive monthly milestone."));
        table.insert(Months, 300, "300 Months. That's your Silver Jubilee (25 years) in months!");
        table.insert(Months, 500, "500 Months. You are roughly 41 years old. Halfway to a thousand!");
        table.insert(Months, 600, "600 Months. You've hit the half-century mark (50 years).");
        table.insert(Months, 1_000, "A Millennium of Months. 83 years of turning calendar pages.");

        table.set_default(Minutes, DefaultText::Fixed("Count them if you dare."));
        table.insert(Minutes, 10_000_000, "10 Million Minutes. Roughly 19 years of time ticking away.");
        table.insert(Minutes, 50_000_000, "50 Million Minutes. Nearly a century of minutes (approx 95 years).");

        table.set_default(Seconds, DefaultText::Fixed("Another billion seconds tick by."));
        table.insert(Seconds, 1_000_000_000, "The Gigasecond. 1 Billion seconds (approx 31.7 years). A computational epoch.");
        table.insert(Seconds, 2_000_000_000, "2 Billion Seconds. Approx 63.4 years. You are a time billionaire twice over.");

        table.set_default(
            Birthday,
            DefaultText::PerValue(|years| format!("Completing orbit number {} around the sun.", years)),
        );

        table
    }

    pub fn insert(&mut self, category: MilestoneCategory, value: u64, text: &'static str) {
        self.specific.insert((category, value), text);
    }

    pub fn set_default(&mut self, category: MilestoneCategory, text: DefaultText) {
        self.defaults.insert(category, text);
    }

    /// Specific text for `(category, value)`, else the category default
    pub fn describe(&self, category: MilestoneCategory, value: u64) -> String {
        if let Some(text) = self.specific.get(&(category, value)) {
            return text.to_string();
        }
        self.defaults
            .get(&category)
            .map(|d| d.render(value))
            .unwrap_or_else(|| GENERIC_DESCRIPTION.to_string())
    }

    /// Text for a Math-family value
    pub fn describe_math(&self, kind: MathKind) -> String {
        match kind {
            MathKind::Pi => {
                "A circular moment in time (Digits of Pi). Perfectly irrational.".to_string()
            }
            MathKind::Fibonacci => {
                "Aligning with nature's Golden Ratio. A moment of perfect proportion.".to_string()
            }
            MathKind::Square { root } => format!(
                "A Perfect Square ({}²). Your timeline is perfectly balanced today.",
                root
            ),
        }
    }
}

impl Default for DescriptionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_entry_wins_over_default() {
        let table = DescriptionTable::standard();
        assert!(table.describe(MilestoneCategory::Power, 10_000).starts_with("The 10k Club!"));
        assert_eq!(table.describe(MilestoneCategory::Power, 10), "A monumental Power of 10.");
    }

    #[test]
    fn test_same_value_differs_by_category() {
        let table = DescriptionTable::standard();
        assert_ne!(
            table.describe(MilestoneCategory::Power, 10_000),
            table.describe(MilestoneCategory::Standard, 10_000)
        );
        assert!(table.describe(MilestoneCategory::Standard, 10_000).contains("5-digit club"));
    }

    #[test]
    fn test_per_value_defaults() {
        let table = DescriptionTable::standard();
        assert_eq!(table.describe(MilestoneCategory::Weeks, 1_500), "You have lived 1500 weeks.");
        assert!(table.describe(MilestoneCategory::Weeks, 2_000).starts_with("2,000 Weeks."));
        assert_eq!(
            table.describe(MilestoneCategory::Birthday, 42),
            "Completing orbit number 42 around the sun."
        );
    }

    #[test]
    fn test_unknown_category_uses_generic_line() {
        let table = DescriptionTable::standard();
        assert_eq!(table.describe(MilestoneCategory::Custom, 7), GENERIC_DESCRIPTION);
        assert_eq!(DescriptionTable::new().describe(MilestoneCategory::Power, 100), GENERIC_DESCRIPTION);
    }

    #[test]
    fn test_math_text_by_kind() {
        let table = DescriptionTable::standard();
        assert!(table.describe_math(MathKind::Pi).contains("Digits of Pi"));
        assert!(table.describe_math(MathKind::Fibonacci).contains("Golden Ratio"));
        assert_eq!(
            table.describe_math(MathKind::Square { root: 12 }),
            "A Perfect Square (12²). Your timeline is perfectly balanced today."
        );
    }

    #[test]
    fn test_shared_table_matches_standard() {
        assert_eq!(
            STANDARD_DESCRIPTIONS.describe(MilestoneCategory::Months, 600),
            DescriptionTable::standard().describe(MilestoneCategory::Months, 600)
        );
    }
}
