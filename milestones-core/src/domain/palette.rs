//! Category → display color mapping handed to the assembler.

use std::collections::HashMap;

use shared::MilestoneCategory;

/// Read-only color table, one hex color per category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    colors: HashMap<MilestoneCategory, String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    #[error("Unknown milestone category in palette: {0}")]
    UnknownCategory(String),
    #[error("Invalid color for {category}: {color}. Expected #rrggbb")]
    InvalidColor { category: MilestoneCategory, color: String },
}

impl CategoryPalette {
    pub fn color_for(&self, category: MilestoneCategory) -> &str {
        self.colors
            .get(&category)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Replace individual colors; keys are category names (case-insensitive)
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Result<Self, PaletteError> {
        for (name, color) in overrides {
            let category: MilestoneCategory = name
                .parse()
                .map_err(|_| PaletteError::UnknownCategory(name.clone()))?;
            if !is_hex_color(color) {
                return Err(PaletteError::InvalidColor {
                    category,
                    color: color.clone(),
                });
            }
            self.colors.insert(category, color.to_ascii_lowercase());
        }
        Ok(self)
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let colors = [
            (MilestoneCategory::Power, "#3b82f6"),    // blue
            (MilestoneCategory::Standard, "#0ea5e9"), // sky
            (MilestoneCategory::Repdigit, "#8b5cf6"), // violet
            (MilestoneCategory::Sequence, "#ec4899"), // pink
            (MilestoneCategory::Math, "#ef4444"),     // red
            (MilestoneCategory::Hourly, "#f97316"),   // orange
            (MilestoneCategory::Weeks, "#14b8a6"),    // teal
            (MilestoneCategory::Months, "#10b981"),   // emerald
            (MilestoneCategory::Minutes, "#8b5cf6"),  // violet
            (MilestoneCategory::Seconds, "#d946ef"),  // fuchsia
            (MilestoneCategory::Birthday, "#f43f5e"), // rose
            (MilestoneCategory::Custom, "#eab308"),   // gold
        ]
        .into_iter()
        .map(|(category, color)| (category, color.to_string()))
        .collect();

        Self { colors }
    }
}

const FALLBACK_COLOR: &str = "#64748b";

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
