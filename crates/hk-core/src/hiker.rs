//! Hiker parameters and resting-metabolic-rate derivation.
//!
//! # RMR units
//!
//! The oxygen-cost model consumes resting metabolic rate in
//! **ml O2 / kg / min**.  Mifflin–St Jeor yields kcal/day, so the derived
//! value is converted with the standard 5 kcal per litre of O2:
//!
//! ```text
//! litres_per_day = kcal_per_day / 5
//! ml_per_kg_min  = litres_per_day / 1440 / body_mass_kg * 1000
//! ```

use crate::error::require_finite;
use crate::{HkError, HkResult};

/// Energy released per litre of oxygen consumed (standard approximation).
pub const KCAL_PER_LITRE_O2: f64 = 5.0;

const MINUTES_PER_DAY: f64 = 1_440.0;

// ── Sex ───────────────────────────────────────────────────────────────────────

/// Selects the Mifflin–St Jeor constant term.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl Sex {
    /// The sex-specific offset in kcal/day.
    #[inline]
    pub fn mifflin_offset(self) -> f64 {
        match self {
            Sex::Male   => 5.0,
            Sex::Female => -161.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male   => "male",
            Sex::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BodyMetrics ───────────────────────────────────────────────────────────────

/// Inputs to the Mifflin–St Jeor resting-energy formula.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex:       Sex,
}

impl BodyMetrics {
    /// Resting energy expenditure in kcal/day.
    pub fn rmr_kcal_per_day(&self) -> f64 {
        10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age_years
            + self.sex.mifflin_offset()
    }

    /// Resting metabolic rate in ml O2 / kg / min.
    pub fn resting_metabolic_rate(&self) -> HkResult<f64> {
        require_positive("body_mass_kg", self.weight_kg)?;
        require_positive("height_cm", self.height_cm)?;
        require_positive("age_years", self.age_years)?;

        let kcal_per_day = self.rmr_kcal_per_day();
        if kcal_per_day <= 0.0 {
            return Err(HkError::invalid(
                "resting_metabolic_rate",
                format!("Mifflin–St Jeor produced {kcal_per_day:.1} kcal/day"),
            ));
        }
        let litres_per_min = kcal_per_day / KCAL_PER_LITRE_O2 / MINUTES_PER_DAY;
        Ok(litres_per_min / self.weight_kg * 1000.0)
    }
}

// ── Hiker ─────────────────────────────────────────────────────────────────────

/// Validated, immutable hiker parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hiker {
    body_mass_kg:           f64,
    resting_metabolic_rate: f64,
}

impl Hiker {
    /// Build from kilograms and an RMR in ml O2 / kg / min.
    pub fn new(body_mass_kg: f64, resting_metabolic_rate: f64) -> HkResult<Self> {
        Ok(Self {
            body_mass_kg:           require_positive("body_mass_kg", body_mass_kg)?,
            resting_metabolic_rate: require_positive(
                "resting_metabolic_rate",
                resting_metabolic_rate,
            )?,
        })
    }

    /// Build with an RMR derived from `metrics` via Mifflin–St Jeor.
    pub fn from_metrics(metrics: BodyMetrics) -> HkResult<Self> {
        let rmr = metrics.resting_metabolic_rate()?;
        Self::new(metrics.weight_kg, rmr)
    }

    /// Resolve a hiker from whatever the caller has.
    ///
    /// A supplied `rmr` wins; otherwise height and age are required to derive
    /// one.  The error names the first missing input.
    pub fn resolve(
        body_mass_kg: f64,
        rmr:          Option<f64>,
        height_cm:    Option<f64>,
        age_years:    Option<f64>,
        sex:          Sex,
    ) -> HkResult<Self> {
        if let Some(rmr) = rmr {
            return Self::new(body_mass_kg, rmr);
        }
        let height_cm = height_cm.ok_or_else(|| {
            HkError::invalid("height_cm", "required to derive RMR when no RMR is given")
        })?;
        let age_years = age_years.ok_or_else(|| {
            HkError::invalid("age_years", "required to derive RMR when no RMR is given")
        })?;
        Self::from_metrics(BodyMetrics { weight_kg: body_mass_kg, height_cm, age_years, sex })
    }

    #[inline]
    pub fn body_mass_kg(&self) -> f64 {
        self.body_mass_kg
    }

    /// ml O2 / kg / min.
    #[inline]
    pub fn resting_metabolic_rate(&self) -> f64 {
        self.resting_metabolic_rate
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> HkResult<f64> {
    let value = require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(HkError::invalid(name, format!("must be > 0, got {value}")))
    }
}
