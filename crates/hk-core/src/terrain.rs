//! Pandolf terrain coefficient.
//!
//! The coefficient multiplies the speed/grade term of the load-carriage
//! equation.  It is not used by the oxygen-cost model.

use crate::error::require_finite;
use crate::{HkError, HkResult};

/// A validated terrain coefficient (`η ≥ 1.0`).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainFactor(f64);

impl TerrainFactor {
    pub const BLACKTOP:    TerrainFactor = TerrainFactor(1.0);
    pub const DIRT_ROAD:   TerrainFactor = TerrainFactor(1.1);
    /// Mixed trail surface; the default.
    pub const LIGHT_BRUSH: TerrainFactor = TerrainFactor(1.2);
    pub const HEAVY_BRUSH: TerrainFactor = TerrainFactor(1.5);
    pub const SWAMP:       TerrainFactor = TerrainFactor(1.8);
    pub const LOOSE_SAND:  TerrainFactor = TerrainFactor(2.1);
    pub const SOFT_SNOW:   TerrainFactor = TerrainFactor(2.5);

    pub fn new(value: f64) -> HkResult<Self> {
        let value = require_finite("terrain_factor", value)?;
        if value < 1.0 {
            return Err(HkError::invalid(
                "terrain_factor",
                format!("must be >= 1.0, got {value}"),
            ));
        }
        Ok(TerrainFactor(value))
    }

    /// Look up a named surface preset (`"blacktop"`, `"dirt-road"`, …).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "blacktop" | "treadmill" => Some(Self::BLACKTOP),
            "dirt-road"              => Some(Self::DIRT_ROAD),
            "light-brush" | "trail"  => Some(Self::LIGHT_BRUSH),
            "heavy-brush"            => Some(Self::HEAVY_BRUSH),
            "swamp"                  => Some(Self::SWAMP),
            "loose-sand" | "sand"    => Some(Self::LOOSE_SAND),
            "soft-snow" | "snow"     => Some(Self::SOFT_SNOW),
            _ => None,
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TerrainFactor {
    fn default() -> Self {
        Self::LIGHT_BRUSH
    }
}

impl std::fmt::Display for TerrainFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
