//! Pandolf load-carriage model with the Santee negative-grade correction.
//!
//! ```text
//! W = body mass (kg)   L = pack mass (kg)   n = terrain factor
//! V = speed (m/s)      G = grade (%)
//!
//! M  = 1.5 W + 2.0 (W + L)(L / W)² + n (W + L)(1.5 V² + 0.35 V G)
//! CF = n ( G (W + L) V / 3.5 − (W + L)(G + 6)² / W + 25 V² )     (G < 0 only)
//! ```
//!
//! `M + CF` is metabolic power in watts; energy is power × segment duration.

use hk_core::{HkError, HkResult, TerrainFactor};

use crate::Segment;
use crate::model::{CostModel, watts_to_kcal};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pandolf {
    body_mass_kg: f64,
    terrain:      TerrainFactor,
}

impl Pandolf {
    /// `body_mass_kg` must be finite and > 0 (it divides the load ratio).
    pub fn new(body_mass_kg: f64, terrain: TerrainFactor) -> HkResult<Self> {
        if !body_mass_kg.is_finite() || body_mass_kg <= 0.0 {
            return Err(HkError::invalid(
                "body_mass_kg",
                format!("must be > 0, got {body_mass_kg}"),
            ));
        }
        Ok(Self { body_mass_kg, terrain })
    }

    #[inline]
    pub fn body_mass_kg(&self) -> f64 {
        self.body_mass_kg
    }

    #[inline]
    pub fn terrain(&self) -> TerrainFactor {
        self.terrain
    }

    /// Uncorrected Pandolf power in watts.
    pub fn base_watts(&self, pack_mass_kg: f64, speed_mps: f64, grade_pct: f64) -> f64 {
        let w = self.body_mass_kg;
        let l = pack_mass_kg;
        let n = self.terrain.value();
        let v = speed_mps;
        let g = grade_pct;

        1.5 * w
            + 2.0 * (w + l) * (l / w).powi(2)
            + n * (w + l) * (1.5 * v.powi(2) + 0.35 * v * g)
    }

    /// Santee correction in watts; zero unless `grade_pct < 0`.
    pub fn santee_correction(&self, pack_mass_kg: f64, speed_mps: f64, grade_pct: f64) -> f64 {
        if grade_pct >= 0.0 {
            return 0.0;
        }
        let w = self.body_mass_kg;
        let l = pack_mass_kg;
        let n = self.terrain.value();
        let v = speed_mps;
        let g = grade_pct;

        n * ((g * (w + l) * v) / 3.5 - ((w + l) * (g + 6.0).powi(2)) / w + 25.0 * v.powi(2))
    }

    /// Total metabolic power in watts.
    pub fn watts(&self, pack_mass_kg: f64, speed_mps: f64, grade_pct: f64) -> f64 {
        self.base_watts(pack_mass_kg, speed_mps, grade_pct)
            + self.santee_correction(pack_mass_kg, speed_mps, grade_pct)
    }

    /// Kilocalories for one segment.
    pub fn estimate_kcal(
        &self,
        pack_mass_kg: f64,
        speed_mps:    f64,
        grade_pct:    f64,
        duration_s:   f64,
    ) -> f64 {
        watts_to_kcal(self.watts(pack_mass_kg, speed_mps, grade_pct), duration_s)
    }
}

impl CostModel for Pandolf {
    fn name(&self) -> &'static str {
        "pandolf"
    }

    fn segment_kcal(&self, segment: &Segment, pack_mass_kg: f64) -> f64 {
        self.estimate_kcal(pack_mass_kg, segment.speed_mps, segment.grade_pct, segment.elapsed_s)
    }
}
