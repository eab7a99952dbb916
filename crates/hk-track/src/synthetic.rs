//! Seeded synthetic tracks for demos and tests.
//!
//! A `SyntheticTrack` walks a fixed bearing at constant speed, sampling one
//! fix every `interval_secs`.  Elevation follows a [`GradeProfile`].  Optional
//! horizontal and vertical jitter imitates GPS noise; the jitter stream is a
//! `SmallRng` seeded from `seed`, so the same parameters always generate the
//! same track.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hk_core::geo::EARTH_RADIUS_M;
use hk_core::{GeoPoint, TrackPoint};

/// How elevation evolves along a synthetic track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GradeProfile {
    Flat,
    /// Constant signed grade in percent.
    Constant(f64),
    /// Climb at `grade_pct` for `half_points` fixes, then descend at the
    /// same grade for the rest of the track.
    OutAndBack { grade_pct: f64, half_points: usize },
}

impl GradeProfile {
    fn grade_at(self, index: usize) -> f64 {
        match self {
            GradeProfile::Flat => 0.0,
            GradeProfile::Constant(g) => g,
            GradeProfile::OutAndBack { grade_pct, half_points } => {
                if index <= half_points { grade_pct } else { -grade_pct }
            }
        }
    }
}

/// Parameters for a generated track.
#[derive(Clone, Debug)]
pub struct SyntheticTrack {
    pub start:         GeoPoint,
    pub start_elev_m:  f64,
    pub start_time:    DateTime<Utc>,
    pub interval_secs: f64,
    pub speed_mps:     f64,
    /// Degrees clockwise from north.
    pub bearing_deg:   f64,
    pub profile:       GradeProfile,
    /// Peak horizontal noise in metres (uniform, per axis).
    pub jitter_m:      f64,
    /// Peak vertical noise in metres (uniform).
    pub elev_jitter_m: f64,
    pub seed:          u64,
}

impl Default for SyntheticTrack {
    /// Four miles per hour due north-east from Lakes of the Clouds, one fix
    /// every five seconds, no noise.
    fn default() -> Self {
        Self {
            start:         GeoPoint::new(44.258_8, -71.318_9),
            start_elev_m:  1_540.0,
            start_time:    Utc.timestamp_opt(1_564_840_800, 0).single().unwrap_or_default(),
            interval_secs: 5.0,
            speed_mps:     1.788_16,
            bearing_deg:   45.0,
            profile:       GradeProfile::Flat,
            jitter_m:      0.0,
            elev_jitter_m: 0.0,
            seed:          42,
        }
    }
}

impl SyntheticTrack {
    /// Generate `count` fixes.
    pub fn generate(&self, count: usize) -> Vec<TrackPoint> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let step_m = self.speed_mps * self.interval_secs;
        let bearing = self.bearing_deg.to_radians();
        let step_ms = (self.interval_secs * 1000.0).round() as i64;

        let mut lat = self.start.lat;
        let mut lon = self.start.lon;
        let mut elev = self.start_elev_m;
        let mut points = Vec::with_capacity(count);

        for i in 0..count {
            if i > 0 {
                let (d_lat, d_lon) = offset_deg(lat, step_m * bearing.cos(), step_m * bearing.sin());
                lat += d_lat;
                lon += d_lon;
                elev += step_m * self.profile.grade_at(i) / 100.0;
            }

            let (noisy_lat, noisy_lon) = if self.jitter_m > 0.0 {
                let north = rng.gen_range(-self.jitter_m..=self.jitter_m);
                let east = rng.gen_range(-self.jitter_m..=self.jitter_m);
                let (d_lat, d_lon) = offset_deg(lat, north, east);
                (lat + d_lat, lon + d_lon)
            } else {
                (lat, lon)
            };
            let noisy_elev = if self.elev_jitter_m > 0.0 {
                elev + rng.gen_range(-self.elev_jitter_m..=self.elev_jitter_m)
            } else {
                elev
            };

            let timestamp = self.start_time + Duration::milliseconds(step_ms * i as i64);
            points.push(TrackPoint::new(noisy_lat, noisy_lon, noisy_elev, timestamp));
        }
        points
    }
}

/// Small-offset conversion from metres north/east to degrees at `lat`.
fn offset_deg(lat: f64, north_m: f64, east_m: f64) -> (f64, f64) {
    let d_lat = (north_m / EARTH_RADIUS_M).to_degrees();
    let d_lon = (east_m / (EARTH_RADIUS_M * lat.to_radians().cos())).to_degrees();
    (d_lat, d_lon)
}
