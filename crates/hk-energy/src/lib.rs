//! `hk-energy` — the energy-expenditure engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`segment`]  | `Segment` — kinematics between two track points              |
//! | [`pack`]     | `PackLoadProfile`, `PackMassModel` (per-run depletion cursor)|
//! | [`model`]    | `CostModel` trait — one segment → kilocalories               |
//! | [`pandolf`]  | `Pandolf` load-carriage model with Santee correction         |
//! | [`ludlow`]   | `LudlowWeyand` oxygen-cost model                             |
//! | [`engine`]   | `CalorieEngine`, `EngineBuilder`, `ModelTotals`              |
//! | [`observer`] | `RunObserver` hooks, `NoopObserver`, `TracingObserver`       |
//! | [`report`]   | `CalorieReport` — stride → totals, human-readable summary    |
//! | [`error`]    | `EnergyError`, `EnergyResult<T>`                             |
//!
//! # Run model (summary)
//!
//! One run walks the whole track once at a given downsampling stride `N`:
//!
//! ```text
//! for i in 0..points:
//!     if i > 0 && i % N == 0:
//!         seg  = Segment::between(last_scored, point[i])
//!         kcal += model(seg, pack.current_mass_kg())   // both models
//!         last_scored = point[i]
//!     pack.advance()                                    // every point
//! ```
//!
//! Pack depletion follows the real point count, never the thinned sample, so
//! the final pack mass is identical for every stride.  Each run starts from a
//! fresh cursor, which makes repeated and parallel runs independent.

pub mod engine;
pub mod error;
pub mod ludlow;
pub mod model;
pub mod observer;
pub mod pack;
pub mod pandolf;
pub mod report;
pub mod segment;

#[cfg(test)]
mod tests;

pub use engine::{CalorieEngine, DEFAULT_STRIDES, EngineBuilder, ModelTotals};
pub use error::{EnergyError, EnergyResult};
pub use ludlow::LudlowWeyand;
pub use model::CostModel;
pub use observer::{NoopObserver, RunObserver, SegmentEvent, TracingObserver};
pub use pack::{PackLoadProfile, PackMassModel};
pub use pandolf::Pandolf;
pub use report::CalorieReport;
pub use segment::Segment;
