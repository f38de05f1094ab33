use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveDateTime};

/// Why an elapsed-time count is notable.
///
/// `Custom` is a display category only: milestones derived from a custom
/// event are retagged to it, while `Milestone::source_event_name` keeps the
/// event that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MilestoneCategory {
    /// Powers of 10
    Power,
    /// 1k, 5k, 25k
    Standard,
    /// 11, 222, 1111
    Repdigit,
    /// 12345, 12321
    Sequence,
    /// Pi, Fibonacci, squares
    Math,
    /// 10k hours
    Hourly,
    /// 1000 weeks
    Weeks,
    /// 500 months
    Months,
    /// 10 million minutes
    Minutes,
    /// 1 billion seconds
    Seconds,
    /// Annual birthdays
    Birthday,
    /// Anything measured from a user event
    Custom,
}

impl MilestoneCategory {
    /// Every category, in declaration order
    pub const ALL: [MilestoneCategory; 12] = [
        MilestoneCategory::Power,
        MilestoneCategory::Standard,
        MilestoneCategory::Repdigit,
        MilestoneCategory::Sequence,
        MilestoneCategory::Math,
        MilestoneCategory::Hourly,
        MilestoneCategory::Weeks,
        MilestoneCategory::Months,
        MilestoneCategory::Minutes,
        MilestoneCategory::Seconds,
        MilestoneCategory::Birthday,
        MilestoneCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneCategory::Power => "Power",
            MilestoneCategory::Standard => "Standard",
            MilestoneCategory::Repdigit => "Repdigit",
            MilestoneCategory::Sequence => "Sequence",
            MilestoneCategory::Math => "Math",
            MilestoneCategory::Hourly => "Hourly",
            MilestoneCategory::Weeks => "Weeks",
            MilestoneCategory::Months => "Months",
            MilestoneCategory::Minutes => "Minutes",
            MilestoneCategory::Seconds => "Seconds",
            MilestoneCategory::Birthday => "Birthday",
            MilestoneCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for MilestoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MilestoneCategory {
    type Err = ParseCategoryError;

    /// Case-insensitive match on the category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MilestoneCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown milestone category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

/// Unit in which a milestone's `value` is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneUnit {
    Days,
    Hours,
    Weeks,
    Months,
    Minutes,
    Seconds,
    Years,
}

impl MilestoneUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneUnit::Days => "days",
            MilestoneUnit::Hours => "hours",
            MilestoneUnit::Weeks => "weeks",
            MilestoneUnit::Months => "months",
            MilestoneUnit::Minutes => "minutes",
            MilestoneUnit::Seconds => "seconds",
            MilestoneUnit::Years => "years",
        }
    }
}

impl fmt::Display for MilestoneUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A notable elapsed-time marker measured from one origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Deterministic ID, e.g. "Birth-Power-10000-days" or "Birth-hourly-10000"
    pub id: String,
    /// Elapsed-time count that triggered this milestone
    pub value: u64,
    pub unit: MilestoneUnit,
    /// Local wall-clock instant (origin + value units)
    pub date: NaiveDateTime,
    pub category: MilestoneCategory,
    pub title: String,
    pub description: String,
    /// Snapshot taken at generation time; recompute against "now" if it matters
    pub is_past: bool,
    /// Hex color resolved from the category palette
    pub color: String,
    /// "Birth" or the name of the custom event this was measured from
    pub source_event_name: String,
}

impl Milestone {
    /// Whether this milestone was measured from the birth origin.
    ///
    /// Custom-event milestones are always retagged `Custom`, so the category
    /// decides this regardless of what either origin is called.
    pub fn is_from_birth(&self) -> bool {
        self.category != MilestoneCategory::Custom
    }
}

/// Label of the primary origin
pub const BIRTH_LABEL: &str = "Birth";

/// Kind of user event. Not consumed by milestone generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CustomEventCategory {
    Personal,
    Career,
    Relationship,
    #[default]
    Other,
}

/// A user-supplied secondary origin (wedding, graduation, new job...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEvent {
    pub id: String,
    pub name: String,
    /// Calendar date, "YYYY-MM-DD" (an RFC 3339 timestamp is also accepted)
    pub date: String,
    #[serde(default)]
    pub category: CustomEventCategory,
}

impl CustomEvent {
    /// Create a custom event with a freshly generated ID
    pub fn new(name: &str, date: &str, category: CustomEventCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            date: date.to_string(),
            category,
        }
    }
}

/// Profile fields the generator cares about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Date of birth, "YYYY-MM-DD"
    pub dob: String,
    /// Time of birth, "HH:MM"
    #[serde(default)]
    pub tob: Option<String>,
}

/// Input for a full milestone generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateMilestonesRequest {
    /// Label of the primary origin, "Birth" when absent
    #[serde(default)]
    pub origin_label: Option<String>,
    pub date_of_birth: Option<String>,
    pub time_of_birth: Option<String>,
    #[serde(default)]
    pub custom_events: Vec<CustomEvent>,
}

impl GenerateMilestonesRequest {
    pub fn from_profile(profile: &UserProfile, custom_events: Vec<CustomEvent>) -> Self {
        Self {
            origin_label: None,
            date_of_birth: Some(profile.dob.clone()),
            time_of_birth: profile.tob.clone(),
            custom_events,
        }
    }
}

/// Past/future selector for milestone lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    #[default]
    All,
    Future,
    Past,
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TimeFilter::All),
            "future" => Ok(TimeFilter::Future),
            "past" => Ok(TimeFilter::Past),
            other => Err(format!("Invalid time filter: {}. Must be all, future or past", other)),
        }
    }
}

/// Filter applied to a generated milestone list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestoneFilter {
    pub time: TimeFilter,
    /// `None` means every category
    pub category: Option<MilestoneCategory>,
}

/// Elapsed time since an origin, truncated to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeStats {
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Countdown to the next birthday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayCountdown {
    pub next_birthday: NaiveDate,
    pub turning_age: i32,
    pub days_left: i64,
}
