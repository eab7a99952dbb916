//! Ludlow-Weyand oxygen-cost walking model.
//!
//! ```text
//! VO2 (ml/kg/min) = VO2_rest + C1·G + VO2_walk_min + (1 + C2·G)·C3·V² + CF
//! ```
//!
//! Downhill is not modelled directly: a negative grade is clamped to 0 and a
//! flat `C_DECLINE` penalty is added instead.  Carried load is not an input.

use hk_core::hiker::KCAL_PER_LITRE_O2;
use hk_core::Hiker;

use crate::Segment;
use crate::model::CostModel;

pub const C1: f64 = 0.32;
pub const VO2_WALK_MIN: f64 = 3.28;
pub const C2: f64 = 0.19;
pub const C3: f64 = 2.66;
pub const C_DECLINE: f64 = 0.73;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LudlowWeyand {
    body_mass_kg:           f64,
    /// ml O2 / kg / min.
    resting_metabolic_rate: f64,
}

impl LudlowWeyand {
    /// Parameters come pre-validated from [`Hiker`].
    pub fn new(hiker: &Hiker) -> Self {
        Self {
            body_mass_kg:           hiker.body_mass_kg(),
            resting_metabolic_rate: hiker.resting_metabolic_rate(),
        }
    }

    /// Oxygen uptake in ml O2 / kg / min.
    pub fn vo2_ml_per_kg_min(&self, grade_pct: f64, speed_mps: f64) -> f64 {
        let (g, cf) = if grade_pct < 0.0 { (0.0, C_DECLINE) } else { (grade_pct, 0.0) };
        let v = speed_mps;

        self.resting_metabolic_rate
            + C1 * g
            + VO2_WALK_MIN
            + (1.0 + C2 * g) * (C3 * v.powi(2))
            + cf
    }

    /// Kilocalories for one segment.
    pub fn estimate_kcal(&self, grade_pct: f64, speed_mps: f64, duration_s: f64) -> f64 {
        if duration_s <= 0.0 {
            return 0.0;
        }
        let ml_per_min = self.vo2_ml_per_kg_min(grade_pct, speed_mps) * self.body_mass_kg;
        let litres_per_min = ml_per_min / 1000.0;
        let kcal_per_hour = litres_per_min * KCAL_PER_LITRE_O2 * 60.0;
        kcal_per_hour * (duration_s / 3600.0)
    }
}

impl CostModel for LudlowWeyand {
    fn name(&self) -> &'static str {
        "ludlow_weyand"
    }

    fn segment_kcal(&self, segment: &Segment, _pack_mass_kg: f64) -> f64 {
        self.estimate_kcal(segment.grade_pct, segment.speed_mps, segment.elapsed_s)
    }
}
