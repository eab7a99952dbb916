//! The `CostModel` trait — the seam between kinematics and physiology.

use crate::Segment;

/// A metabolic-cost strategy: one scored segment in, kilocalories out.
///
/// Implementations hold only immutable hiker/terrain parameters and read
/// nothing but their arguments, so a single instance can be shared across
/// threads scoring different strides.
///
/// # Contract
///
/// - A segment with `elapsed_s == 0` returns exactly `0.0`.
/// - Finite inputs never yield NaN or infinity.
pub trait CostModel: Send + Sync {
    /// Short identifier used in logs and report columns.
    fn name(&self) -> &'static str;

    /// Energy spent over `segment` while carrying `pack_mass_kg`.
    ///
    /// Models that ignore carried load simply disregard `pack_mass_kg`.
    fn segment_kcal(&self, segment: &Segment, pack_mass_kg: f64) -> f64;
}

/// Convert a metabolic power in watts, sustained for `duration_s`, into
/// kilocalories.
///
/// Duration is a multiplier, never a divisor: zero duration is exactly zero
/// energy.
#[inline]
pub fn watts_to_kcal(watts: f64, duration_s: f64) -> f64 {
    if duration_s <= 0.0 {
        return 0.0;
    }
    watts / 4184.0 * 3600.0 * (duration_s / 3600.0)
}
