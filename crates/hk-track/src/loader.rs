//! GPX and CSV track loaders.
//!
//! # CSV format
//!
//! One row per fix, in recording order.  `time` is RFC 3339; `elevation`
//! may be left empty.
//!
//! ```csv
//! latitude,longitude,elevation,time
//! 44.270512,-71.303291,1917.0,2019-08-03T14:00:00Z
//! 44.270601,-71.303180,1918.5,2019-08-03T14:00:05Z
//! 44.270688,-71.303066,,2019-08-03T14:00:10.500Z
//! ```
//!
//! # GPX
//!
//! Every segment of every track is read in document order and flattened into
//! one sequence.  Waypoints and routes are ignored.  Track points must carry
//! a `<time>`; a point without one is an error rather than being silently
//! dropped, since dropping it would shift the pack-depletion schedule.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use hk_core::TrackPoint;

use crate::{TrackError, TrackResult};

// ── Format detection ──────────────────────────────────────────────────────────

/// On-disk track encodings understood by [`load_track`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TrackFormat {
    Gpx,
    Csv,
}

impl TrackFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> TrackResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "gpx" => Ok(TrackFormat::Gpx),
            "csv" => Ok(TrackFormat::Csv),
            _ => Err(TrackError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a track from `path`, choosing the loader by file extension.
pub fn load_track(path: &Path) -> TrackResult<Vec<TrackPoint>> {
    match TrackFormat::from_path(path)? {
        TrackFormat::Gpx => load_track_gpx(path),
        TrackFormat::Csv => load_track_csv(path),
    }
}

/// Load a track from a CSV file.
pub fn load_track_csv(path: &Path) -> TrackResult<Vec<TrackPoint>> {
    info!("Reading CSV track: {}", path.display());
    let file = File::open(path)?;
    load_track_csv_reader(file)
}

/// Like [`load_track_csv`] but accepts any `Read` source.
pub fn load_track_csv_reader<R: Read>(reader: R) -> TrackResult<Vec<TrackPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut fill = ElevationFill::default();
    let mut points = Vec::new();

    for result in csv_reader.deserialize::<TrackRecord>() {
        let row = result?;
        let elevation = fill.resolve(row.elevation);
        points.push(TrackPoint::new(row.latitude, row.longitude, elevation, row.time));
    }

    finish(points, fill)
}

/// Load every track segment from a GPX file.
pub fn load_track_gpx(path: &Path) -> TrackResult<Vec<TrackPoint>> {
    info!("Reading GPX track: {}", path.display());
    let file = File::open(path)?;
    load_track_gpx_reader(BufReader::new(file))
}

/// Like [`load_track_gpx`] but accepts any `Read` source.
pub fn load_track_gpx_reader<R: Read>(reader: R) -> TrackResult<Vec<TrackPoint>> {
    let gpx = gpx::read(reader).map_err(|e| TrackError::Gpx(e.to_string()))?;
    let mut fill = ElevationFill::default();
    let mut points = Vec::new();

    for track in gpx.tracks {
        for segment in track.segments {
            for waypoint in segment.points {
                let index = points.len();
                let time = waypoint.time.ok_or(TrackError::MissingTime(index))?;
                let iso = time
                    .format()
                    .map_err(|e| TrackError::BadTime { index, reason: e.to_string() })?;
                let timestamp = DateTime::parse_from_rfc3339(&iso)
                    .map_err(|e| TrackError::BadTime { index, reason: e.to_string() })?
                    .with_timezone(&Utc);

                let geo = waypoint.point();
                let elevation = fill.resolve(waypoint.elevation);
                points.push(TrackPoint::new(geo.y(), geo.x(), elevation, timestamp));
            }
        }
    }

    finish(points, fill)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TrackRecord {
    latitude:  f64,
    longitude: f64,
    elevation: Option<f64>,
    time:      DateTime<Utc>,
}

/// Carries the last known elevation forward over fixes that lack one.
#[derive(Default)]
struct ElevationFill {
    last:   f64,
    filled: usize,
}

impl ElevationFill {
    fn resolve(&mut self, elevation: Option<f64>) -> f64 {
        match elevation {
            Some(e) => {
                self.last = e;
                e
            }
            None => {
                self.filled += 1;
                self.last
            }
        }
    }
}

/// Consecutive fixes that do not advance in time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TimeOrder {
    /// Same timestamp as the previous fix.
    pub ties:      usize,
    /// Earlier than the previous fix.
    pub reversals: usize,
}

impl TimeOrder {
    pub(crate) fn of(points: &[TrackPoint]) -> Self {
        let mut order = TimeOrder::default();
        for w in points.windows(2) {
            if w[1].timestamp == w[0].timestamp {
                order.ties += 1;
            } else if w[1].timestamp < w[0].timestamp {
                order.reversals += 1;
            }
        }
        order
    }
}

fn finish(points: Vec<TrackPoint>, fill: ElevationFill) -> TrackResult<Vec<TrackPoint>> {
    if points.is_empty() {
        return Err(TrackError::Empty);
    }

    let order = TimeOrder::of(&points);
    if order.ties > 0 {
        warn!("{} fix(es) repeat the previous timestamp; they score as zero-duration segments", order.ties);
    }
    if order.reversals > 0 {
        warn!("{} fix(es) step back in time; they score with the absolute time gap", order.reversals);
    }
    if fill.filled > 0 {
        debug!("{} fix(es) had no elevation; carried previous value forward", fill.filled);
    }

    info!(
        "Loaded {} points spanning {} s",
        points.len(),
        points[0].seconds_between(&points[points.len() - 1])
    );
    Ok(points)
}
