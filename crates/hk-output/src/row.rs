//! Plain data row types written by output backends.

use hk_energy::{ModelTotals, SegmentEvent};

/// One scored segment of one stride run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRow {
    pub stride:             usize,
    /// Index of the segment's end point in the original track.
    pub index:              usize,
    pub distance_m:         f64,
    pub elapsed_s:          f64,
    pub elevation_gain_m:   f64,
    pub grade_pct:          f64,
    pub speed_mps:          f64,
    pub pack_mass_kg:       f64,
    pub pandolf_kcal:       f64,
    pub ludlow_weyand_kcal: f64,
}

impl From<&SegmentEvent<'_>> for SegmentRow {
    fn from(e: &SegmentEvent<'_>) -> Self {
        Self {
            stride:             e.stride,
            index:              e.index,
            distance_m:         e.segment.distance_m,
            elapsed_s:          e.segment.elapsed_s,
            elevation_gain_m:   e.segment.elevation_gain_m,
            grade_pct:          e.segment.grade_pct,
            speed_mps:          e.segment.speed_mps,
            pack_mass_kg:       e.pack_mass_kg,
            pandolf_kcal:       e.pandolf_kcal,
            ludlow_weyand_kcal: e.ludlow_weyand_kcal,
        }
    }
}

/// Totals for one stride, as written to `calories.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrideRow {
    pub stride:             usize,
    pub segments:           usize,
    pub pandolf_kcal:       f64,
    pub ludlow_weyand_kcal: f64,
    pub final_pack_mass_kg: f64,
}

impl From<&ModelTotals> for StrideRow {
    fn from(t: &ModelTotals) -> Self {
        Self {
            stride:             t.stride,
            segments:           t.segments_scored,
            pandolf_kcal:       t.pandolf_kcal,
            ludlow_weyand_kcal: t.ludlow_weyand_kcal,
            final_pack_mass_kg: t.final_pack_mass_kg,
        }
    }
}
