//! Segment kinematics between two track points.

use hk_core::TrackPoint;

/// Kinematics of one (possibly strided) track segment.
///
/// Ephemeral: built, scored, and dropped within one aggregation step.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Segment {
    /// Horizontal great-circle distance; elevation is excluded.
    pub distance_m:       f64,
    pub elapsed_s:        f64,
    /// Signed; negative means descent.
    pub elevation_gain_m: f64,
    pub grade_pct:        f64,
    pub speed_mps:        f64,
}

impl Segment {
    /// Extract kinematics from `previous` to `current`.
    ///
    /// Never fails.  Stationary samples (zero distance) get grade 0 and
    /// duplicate timestamps (zero elapsed time) get speed 0, so neither can
    /// produce NaN or infinity downstream.
    pub fn between(previous: &TrackPoint, current: &TrackPoint) -> Segment {
        let distance_m = previous.distance_2d_m(current);
        let elapsed_s = previous.seconds_between(current);
        let elevation_gain_m = current.elevation - previous.elevation;

        let grade_pct = if distance_m == 0.0 {
            0.0
        } else {
            elevation_gain_m / distance_m * 100.0
        };
        let speed_mps = if elapsed_s > 0.0 { distance_m / elapsed_s } else { 0.0 };

        Segment { distance_m, elapsed_s, elevation_gain_m, grade_pct, speed_mps }
    }

    /// `true` when the segment has no horizontal extent or no duration.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.distance_m == 0.0 || self.elapsed_s == 0.0
    }
}
