//! Core utilities shared by scrapers and the orchestrator
//!
//! - `http`: JSON GET helper with a fixed retry policy
//! - `export`: flat JSON file export and re-import

pub mod export;
pub mod http;

pub use export::{read_json, write_json};
pub use http::{decode, HttpClient};
