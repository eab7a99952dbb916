//! Unit conversion at the input boundary.
//!
//! User-facing inputs are in pounds; everything past construction works in
//! kilograms.

/// International avoirdupois pound, exact.
pub const LBS_TO_KG: f64 = 0.453_592_37;

#[inline]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * LBS_TO_KG
}

#[inline]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / LBS_TO_KG
}
