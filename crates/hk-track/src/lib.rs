//! `hk-track` — sources of ordered `TrackPoint` sequences.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`loader`]    | `load_track`, GPX and CSV loaders (path and `Read`)       |
//! | [`synthetic`] | `SyntheticTrack`, `GradeProfile` — seeded test tracks     |
//! | [`error`]     | `TrackError`, `TrackResult<T>`                            |
//!
//! Every source yields a plain `Vec<TrackPoint>` in file order.  Points are
//! not re-sampled, smoothed, or reordered; the energy engine consumes them as
//! given.
//!
//! # Missing elevation
//!
//! Fixes without an elevation inherit the previous fix's elevation (0 m
//! before the first known value), so a dropped altitude reading reads as
//! flat ground rather than a cliff.

pub mod error;
pub mod loader;
pub mod synthetic;


pub use error::{TrackError, TrackResult};
pub use loader::{
    TrackFormat, load_track, load_track_csv, load_track_csv_reader, load_track_gpx,
    load_track_gpx_reader,
};
pub use synthetic::{GradeProfile, SyntheticTrack};
