//! Backpack mass depletion.
//!
//! Pack mass falls linearly from `start_mass_kg` to `end_mass_kg` over the
//! track's points (food eaten, water drunk).  The cursor is advanced once per
//! *original* point, independent of which points a stride actually scores.

use hk_core::{HkError, HkResult};

/// Immutable pack-load inputs for one track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PackLoadProfile {
    pub start_mass_kg:     f64,
    pub end_mass_kg:       f64,
    pub total_point_count: usize,
}

impl PackLoadProfile {
    /// Validate and build a profile.
    ///
    /// A track with fewer than two points cannot form a segment and would
    /// divide by zero below, so it is rejected here.
    pub fn new(start_mass_kg: f64, end_mass_kg: f64, total_point_count: usize) -> HkResult<Self> {
        let profile = Self { start_mass_kg, end_mass_kg, total_point_count };
        profile.validate()?;
        Ok(profile)
    }

    /// Check masses (finite, `>= 0`) and point count (`>= 2`).
    ///
    /// The fields are public, so [`PackMassModel::new`] re-runs this on
    /// whatever profile it is handed.
    pub fn validate(&self) -> HkResult<()> {
        check_mass("pack_start_kg", self.start_mass_kg)?;
        check_mass("pack_end_kg", self.end_mass_kg)?;
        if self.total_point_count < 2 {
            return Err(HkError::InsufficientPoints(self.total_point_count));
        }
        Ok(())
    }

    /// Kilograms shed per original track point.  Negative if the pack gains
    /// mass (e.g. a water resupply).
    #[inline]
    pub fn mass_loss_per_point(&self) -> f64 {
        (self.start_mass_kg - self.end_mass_kg) / self.total_point_count as f64
    }
}

fn check_mass(name: &'static str, kg: f64) -> HkResult<()> {
    if !kg.is_finite() || kg < 0.0 {
        return Err(HkError::invalid(name, format!("must be a finite mass >= 0, got {kg}")));
    }
    Ok(())
}

/// The per-run pack-mass cursor.
///
/// Owned by exactly one run.  Never share one across strides: build a new
/// model (or [`reset`][Self::reset]) at the start of every run.
#[derive(Clone, Debug)]
pub struct PackMassModel {
    profile:             PackLoadProfile,
    mass_loss_per_point: f64,
    current_mass_kg:     f64,
    advances:            usize,
}

impl PackMassModel {
    pub fn new(profile: PackLoadProfile) -> HkResult<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            mass_loss_per_point: profile.mass_loss_per_point(),
            current_mass_kg:     profile.start_mass_kg,
            advances:            0,
        })
    }

    /// Step past one original-resolution point.
    #[inline]
    pub fn advance(&mut self) {
        self.current_mass_kg -= self.mass_loss_per_point;
        self.advances += 1;
    }

    #[inline]
    pub fn current_mass_kg(&self) -> f64 {
        self.current_mass_kg
    }

    #[inline]
    pub fn mass_loss_per_point(&self) -> f64 {
        self.mass_loss_per_point
    }

    /// Number of `advance` calls since construction or the last reset.
    #[inline]
    pub fn advances(&self) -> usize {
        self.advances
    }

    /// Return the cursor to the start mass.
    pub fn reset(&mut self) {
        self.current_mass_kg = self.profile.start_mass_kg;
        self.advances = 0;
    }

    pub fn profile(&self) -> &PackLoadProfile {
        &self.profile
    }
}
