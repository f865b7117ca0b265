//! Type-safe wrappers and enums for scraper inputs.

pub mod ids;
pub mod kind;
pub mod time;

pub use ids::{Gameweek, PlayerId};
pub use kind::ScraperKind;
pub use time::OddsDate;
