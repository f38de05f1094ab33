//! # Domain Module
//!
//! Contains all business logic for life milestone generation.
//!
//! Everything here is pure: no I/O, no shared mutable state. Given an origin
//! instant and the fixed pattern catalogs, the same input always produces the
//! same milestones in the same order, so callers can recompute from scratch on
//! every change.
//!
//! ## Module Organization
//!
//! - **catalogs**: Bounded integer sequences per pattern family (powers, round
//!   numbers, repdigits, sequences, pi/Fibonacci/squares, time-unit samples)
//! - **projector**: Adds N days/hours/weeks/months/minutes/seconds/years to an origin
//! - **descriptions**: Curated `(category, value)` text with per-category defaults
//! - **palette**: Category → color table
//! - **formatting**: Titles, ordinals, thousands separators, share text
//! - **assembler**: Builds the milestone records for one origin
//! - **merger**: `MilestoneService`, runs every origin and merges the results
//! - **queries**: Filtering and dashboard views over a generated list
//! - **age**: Elapsed-time statistics and birthday countdown
//!
//! ## Business Rules
//!
//! - Every milestone lies within 100 years of its origin
//! - Output is sorted by date; ties keep origin order, then family order
//! - Custom-event milestones are shown as `Custom` but keep their event name
//! - A missing or invalid origin date produces no milestones, never an error

pub mod age;
pub mod assembler;
pub mod catalogs;
pub mod descriptions;
pub mod formatting;
pub mod merger;
pub mod models;
pub mod palette;
pub mod projector;
pub mod queries;

pub use assembler::MilestoneAssembler;
pub use descriptions::DescriptionTable;
pub use merger::MilestoneService;
pub use models::{Origin, OriginError};
pub use palette::{CategoryPalette, PaletteError};
