//! The `CalorieEngine`: downsampling controller and per-stride aggregator.

use hk_core::{BodyMetrics, Hiker, HkError, Sex, TerrainFactor, TrackPoint, lbs_to_kg};
use tracing::info;

use crate::{
    CalorieReport, CostModel, EnergyError, EnergyResult, LudlowWeyand, NoopObserver,
    PackLoadProfile, PackMassModel, Pandolf, RunObserver, Segment, SegmentEvent,
};

/// Strides evaluated by batch mode when the caller does not choose.
pub const DEFAULT_STRIDES: [usize; 9] = [1, 2, 3, 4, 5, 8, 10, 12, 20];

// ── ModelTotals ───────────────────────────────────────────────────────────────

/// Accumulated results of one stride run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelTotals {
    pub stride:             usize,
    pub pandolf_kcal:       f64,
    pub ludlow_weyand_kcal: f64,
    pub segments_scored:    usize,
    /// Horizontal distance covered by the scored segments.
    pub distance_m:         f64,
    /// Time covered by the scored segments.
    pub elapsed_s:          f64,
    /// Cursor value after every original point has been visited.
    pub final_pack_mass_kg: f64,
}

impl ModelTotals {
    fn empty(stride: usize, start_mass_kg: f64) -> Self {
        Self {
            stride,
            pandolf_kcal:       0.0,
            ludlow_weyand_kcal: 0.0,
            segments_scored:    0,
            distance_m:         0.0,
            elapsed_s:          0.0,
            final_pack_mass_kg: start_mass_kg,
        }
    }

    /// Pandolf total rounded to the nearest whole kilocalorie.
    #[inline]
    pub fn pandolf_rounded(&self) -> i64 {
        self.pandolf_kcal.round() as i64
    }

    /// Ludlow-Weyand total rounded to the nearest whole kilocalorie.
    #[inline]
    pub fn ludlow_weyand_rounded(&self) -> i64 {
        self.ludlow_weyand_kcal.round() as i64
    }
}

// ── CalorieEngine ─────────────────────────────────────────────────────────────

/// Estimates energy expenditure over one track.
///
/// All inputs are validated at construction; once built, [`run`][Self::run]
/// only fails for a zero stride.  The engine holds no mutable state, so it
/// can be run any number of times, with any strides, from any thread.
///
/// Create with [`CalorieEngine::new`] (pound inputs) or [`EngineBuilder`].
#[derive(Clone, Debug)]
pub struct CalorieEngine {
    track:   Vec<TrackPoint>,
    hiker:   Hiker,
    pack:    PackLoadProfile,
    pandolf: Pandolf,
    ludlow:  LudlowWeyand,
}

impl CalorieEngine {
    /// Build an engine from pound-denominated inputs.
    ///
    /// `terrain_factor` defaults to 1.2 (mixed trail).  `resting_metabolic_rate`
    /// (ml O2 / kg / min) is required here; use
    /// [`EngineBuilder::body_metrics`] to derive it instead.
    pub fn new(
        track:                  Vec<TrackPoint>,
        body_mass_lbs:          f64,
        pack_start_lbs:         f64,
        pack_end_lbs:           f64,
        terrain_factor:         Option<f64>,
        resting_metabolic_rate: Option<f64>,
    ) -> EnergyResult<Self> {
        let mut builder = EngineBuilder::new(track)
            .body_mass_lbs(body_mass_lbs)
            .pack_lbs(pack_start_lbs, pack_end_lbs);
        if let Some(n) = terrain_factor {
            builder = builder.terrain_factor(n);
        }
        if let Some(rmr) = resting_metabolic_rate {
            builder = builder.resting_metabolic_rate(rmr);
        }
        builder.build()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn track(&self) -> &[TrackPoint] {
        &self.track
    }

    pub fn hiker(&self) -> &Hiker {
        &self.hiker
    }

    pub fn pack(&self) -> &PackLoadProfile {
        &self.pack
    }

    pub fn pandolf(&self) -> &Pandolf {
        &self.pandolf
    }

    pub fn ludlow_weyand(&self) -> &LudlowWeyand {
        &self.ludlow
    }

    // ── Runs ──────────────────────────────────────────────────────────────

    /// Total kilocalories per model, scoring every `stride`-th point.
    pub fn run(&self, stride: usize) -> EnergyResult<ModelTotals> {
        self.run_with(stride, &mut NoopObserver)
    }

    /// Like [`run`][Self::run], reporting each scored segment to `observer`.
    pub fn run_with<O: RunObserver + ?Sized>(
        &self,
        stride:   usize,
        observer: &mut O,
    ) -> EnergyResult<ModelTotals> {
        if stride == 0 {
            return Err(EnergyError::InvalidStride(stride));
        }

        // Fresh cursor per run; never carried over from a previous stride.
        let mut pack = PackMassModel::new(self.pack)?;
        let mut totals = ModelTotals::empty(stride, pack.current_mass_kg());
        observer.on_run_start(stride, self.track.len());

        let mut last = &self.track[0];
        for (index, point) in self.track.iter().enumerate() {
            if index > 0 && index % stride == 0 {
                let segment = Segment::between(last, point);
                let pack_mass_kg = pack.current_mass_kg();
                let pandolf_kcal = self.pandolf.segment_kcal(&segment, pack_mass_kg);
                let ludlow_weyand_kcal = self.ludlow.segment_kcal(&segment, pack_mass_kg);

                totals.pandolf_kcal += pandolf_kcal;
                totals.ludlow_weyand_kcal += ludlow_weyand_kcal;
                totals.segments_scored += 1;
                totals.distance_m += segment.distance_m;
                totals.elapsed_s += segment.elapsed_s;

                observer.on_segment(&SegmentEvent {
                    stride,
                    index,
                    from: last,
                    to: point,
                    segment,
                    pack_mass_kg,
                    pandolf_kcal,
                    ludlow_weyand_kcal,
                });
                last = point;
            }
            pack.advance();
        }

        totals.final_pack_mass_kg = pack.current_mass_kg();
        observer.on_run_end(&totals);
        Ok(totals)
    }

    /// Run once per stride and collect a [`CalorieReport`].
    ///
    /// Duplicate strides are scored once.  With the `parallel` feature the
    /// strides run concurrently; results are identical either way.
    pub fn report(&self, strides: &[usize]) -> EnergyResult<CalorieReport> {
        let mut strides = strides.to_vec();
        strides.sort_unstable();
        strides.dedup();

        let runs = self.run_strides(&strides)?;

        let mut report = CalorieReport::new();
        for totals in runs {
            info!(
                "stride {:>2}: pandolf {:.0} kcal, ludlow-weyand {:.0} kcal over {} segments",
                totals.stride,
                totals.pandolf_kcal,
                totals.ludlow_weyand_kcal,
                totals.segments_scored
            );
            report.insert(totals);
        }
        Ok(report)
    }

    /// [`report`][Self::report] over [`DEFAULT_STRIDES`].
    pub fn default_report(&self) -> EnergyResult<CalorieReport> {
        self.report(&DEFAULT_STRIDES)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_strides(&self, strides: &[usize]) -> EnergyResult<Vec<ModelTotals>> {
        strides.iter().map(|&s| self.run(s)).collect()
    }

    #[cfg(feature = "parallel")]
    fn run_strides(&self, strides: &[usize]) -> EnergyResult<Vec<ModelTotals>> {
        use rayon::prelude::*;
        strides.par_iter().map(|&s| self.run(s)).collect()
    }
}

// ── EngineBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`CalorieEngine`].
///
/// # Required inputs
///
/// - the track (at least two points)
/// - body mass ([`body_mass_lbs`][Self::body_mass_lbs] or
///   [`body_mass_kg`][Self::body_mass_kg]), unless a full
///   [`hiker`][Self::hiker] is supplied
/// - an RMR source: [`resting_metabolic_rate`][Self::resting_metabolic_rate],
///   [`body_metrics`][Self::body_metrics], or [`hiker`][Self::hiker]
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                       |
/// |------------------------|-------------------------------|
/// | `.pack_lbs(s, e)`      | empty pack (0 → 0)            |
/// | `.terrain(t)`          | `TerrainFactor::LIGHT_BRUSH`  |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(points)
///     .body_mass_lbs(150.0)
///     .pack_lbs(50.0, 38.0)
///     .body_metrics(170.0, 40.0, Sex::Male)
///     .build()?;
/// let report = engine.default_report()?;
/// print!("{}", report.summary());
/// ```
pub struct EngineBuilder {
    track:        Vec<TrackPoint>,
    body_mass_kg: Option<f64>,
    pack_kg:      (f64, f64),
    terrain:      Option<f64>,
    rmr:          Option<f64>,
    metrics:      Option<(f64, f64, Sex)>,
    hiker:        Option<Hiker>,
}

impl EngineBuilder {
    pub fn new(track: Vec<TrackPoint>) -> Self {
        Self {
            track,
            body_mass_kg: None,
            pack_kg:      (0.0, 0.0),
            terrain:      None,
            rmr:          None,
            metrics:      None,
            hiker:        None,
        }
    }

    pub fn body_mass_lbs(self, lbs: f64) -> Self {
        self.body_mass_kg(lbs_to_kg(lbs))
    }

    pub fn body_mass_kg(mut self, kg: f64) -> Self {
        self.body_mass_kg = Some(kg);
        self
    }

    pub fn pack_lbs(self, start_lbs: f64, end_lbs: f64) -> Self {
        self.pack_kg(lbs_to_kg(start_lbs), lbs_to_kg(end_lbs))
    }

    pub fn pack_kg(mut self, start_kg: f64, end_kg: f64) -> Self {
        self.pack_kg = (start_kg, end_kg);
        self
    }

    /// Raw terrain coefficient; validated (`≥ 1.0`) in [`build`][Self::build].
    pub fn terrain_factor(mut self, n: f64) -> Self {
        self.terrain = Some(n);
        self
    }

    pub fn terrain(self, terrain: TerrainFactor) -> Self {
        self.terrain_factor(terrain.value())
    }

    /// Resting metabolic rate in ml O2 / kg / min.
    pub fn resting_metabolic_rate(mut self, rmr: f64) -> Self {
        self.rmr = Some(rmr);
        self
    }

    /// Derive RMR with Mifflin–St Jeor when no explicit RMR is given.
    pub fn body_metrics(mut self, height_cm: f64, age_years: f64, sex: Sex) -> Self {
        self.metrics = Some((height_cm, age_years, sex));
        self
    }

    /// Supply a fully resolved hiker; overrides body mass and RMR inputs.
    pub fn hiker(mut self, hiker: Hiker) -> Self {
        self.hiker = Some(hiker);
        self
    }

    /// Validate every input and return a ready-to-run engine.
    pub fn build(self) -> EnergyResult<CalorieEngine> {
        let hiker = match self.hiker {
            Some(h) => h,
            None => {
                let body_mass_kg = self
                    .body_mass_kg
                    .ok_or_else(|| HkError::invalid("body_mass_kg", "not supplied"))?;
                match (self.rmr, self.metrics) {
                    (Some(rmr), _) => Hiker::new(body_mass_kg, rmr)?,
                    (None, Some((height_cm, age_years, sex))) => {
                        Hiker::from_metrics(BodyMetrics {
                            weight_kg: body_mass_kg,
                            height_cm,
                            age_years,
                            sex,
                        })?
                    }
                    (None, None) => {
                        return Err(HkError::invalid(
                            "resting_metabolic_rate",
                            "not supplied and no height/age/sex to derive it from",
                        )
                        .into());
                    }
                }
            }
        };

        let terrain = match self.terrain {
            Some(n) => TerrainFactor::new(n)?,
            None => TerrainFactor::default(),
        };

        let (start_kg, end_kg) = self.pack_kg;
        let pack = PackLoadProfile::new(start_kg, end_kg, self.track.len())?;
        let pandolf = Pandolf::new(hiker.body_mass_kg(), terrain)?;
        let ludlow = LudlowWeyand::new(&hiker);

        Ok(CalorieEngine { track: self.track, hiker, pack, pandolf, ludlow })
    }
}
