//! Run observer hooks for per-segment reporting.
//!
//! The engine itself never logs per segment.  A caller that wants a
//! breakdown (debug logging, a segment CSV, a database) passes an observer to
//! [`CalorieEngine::run_with`][crate::CalorieEngine::run_with]; verbosity is
//! therefore decided at the call site, not by process-wide state.

use hk_core::TrackPoint;
use tracing::{debug, trace};

use crate::{ModelTotals, Segment};

/// Everything known about one scored segment.
#[derive(Copy, Clone, Debug)]
pub struct SegmentEvent<'a> {
    pub stride:             usize,
    /// Index of `to` in the original track.
    pub index:              usize,
    pub from:               &'a TrackPoint,
    pub to:                 &'a TrackPoint,
    pub segment:            Segment,
    /// Pack mass at `to`.
    pub pack_mass_kg:       f64,
    pub pandolf_kcal:       f64,
    pub ludlow_weyand_kcal: f64,
}

/// Callbacks invoked by a stride run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RunObserver {
    /// Called before the first point is visited.
    fn on_run_start(&mut self, _stride: usize, _points: usize) {}

    /// Called once per scored segment, in track order.
    fn on_segment(&mut self, _event: &SegmentEvent<'_>) {}

    /// Called after the last point with the run's totals.
    fn on_run_end(&mut self, _totals: &ModelTotals) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Emits one `tracing` debug event per scored segment, with the endpoint
/// positions at trace level.
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_run_start(&mut self, stride: usize, points: usize) {
        debug!(stride, points, "starting stride run");
    }

    fn on_segment(&mut self, e: &SegmentEvent<'_>) {
        trace!("last point {}", e.from);
        trace!("point {}", e.to);
        debug!(
            index = e.index,
            distance_m = e.segment.distance_m,
            elapsed_s = e.segment.elapsed_s,
            elevation_gain_m = e.segment.elevation_gain_m,
            grade_pct = e.segment.grade_pct,
            pack_kg = e.pack_mass_kg,
            pandolf_kcal = e.pandolf_kcal,
            ludlow_weyand_kcal = e.ludlow_weyand_kcal,
            "segment"
        );
    }

    fn on_run_end(&mut self, totals: &ModelTotals) {
        debug!(
            stride = totals.stride,
            segments = totals.segments_scored,
            pandolf_kcal = totals.pandolf_kcal,
            ludlow_weyand_kcal = totals.ludlow_weyand_kcal,
            "stride run complete"
        );
    }
}
