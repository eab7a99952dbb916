//! One timestamped position fix along a track.

use chrono::{DateTime, Utc};

use crate::GeoPoint;

/// An immutable track sample: position, elevation, and time.
///
/// Produced once by a track loader and never mutated.  A track is an ordered
/// `Vec<TrackPoint>` with strictly increasing timestamps; ties are tolerated
/// and simply produce zero-duration segments.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPoint {
    /// Degrees, WGS-84.
    pub latitude:  f64,
    /// Degrees, WGS-84.
    pub longitude: f64,
    /// Metres above sea level.
    pub elevation: f64,
    pub timestamp: DateTime<Utc>,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64, timestamp: DateTime<Utc>) -> Self {
        Self { latitude, longitude, elevation, timestamp }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Planar distance to `other` in metres (elevation excluded).
    #[inline]
    pub fn distance_2d_m(&self, other: &TrackPoint) -> f64 {
        self.position().distance_2d_m(other.position())
    }

    /// Unsigned seconds between the two fixes, microsecond resolution.
    pub fn seconds_between(&self, other: &TrackPoint) -> f64 {
        let delta = other.timestamp - self.timestamp;
        match delta.num_microseconds() {
            Some(us) => us.unsigned_abs() as f64 / 1_000_000.0,
            // Beyond ~292k years of microseconds.
            None => delta.num_milliseconds().unsigned_abs() as f64 / 1000.0,
        }
    }
}

impl std::fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {:.1} m @ {}",
            self.position(),
            self.elevation,
            self.timestamp.to_rfc3339()
        )
    }
}
