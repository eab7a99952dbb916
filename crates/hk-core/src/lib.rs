//! `hk-core` — foundational types for the `rust_hike` energy estimator.
//!
//! This crate is a dependency of every other `hk-*` crate.  It intentionally
//! has no `hk-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, 2D haversine distance                         |
//! | [`point`]   | `TrackPoint` — one timestamped position fix               |
//! | [`units`]   | pound ↔ kilogram conversion                               |
//! | [`hiker`]   | `Hiker`, `Sex`, `BodyMetrics` (Mifflin–St Jeor RMR)       |
//! | [`terrain`] | `TerrainFactor` and named surface presets                 |
//! | [`error`]   | `HkError`, `HkResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod hiker;
pub mod point;
pub mod terrain;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HkError, HkResult};
pub use geo::GeoPoint;
pub use hiker::{BodyMetrics, Hiker, Sex};
pub use point::TrackPoint;
pub use terrain::TerrainFactor;
pub use units::{LBS_TO_KG, kg_to_lbs, lbs_to_kg};
