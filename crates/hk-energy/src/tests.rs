//! Unit and integration tests for hk-energy.

use chrono::{TimeZone, Utc};

use hk_core::{Hiker, TerrainFactor, TrackPoint, lbs_to_kg};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T0_MS: i64 = 1_564_840_800_000;

/// A fix `secs` seconds after a fixed reference time.
fn pt(lat: f64, lon: f64, ele: f64, secs: f64) -> TrackPoint {
    let ms = T0_MS + (secs * 1000.0).round() as i64;
    TrackPoint::new(lat, lon, ele, Utc.timestamp_millis_opt(ms).unwrap())
}

/// 150 lb hiker, RMR 3.5 ml/kg/min.
fn hiker() -> Hiker {
    Hiker::new(lbs_to_kg(150.0), 3.5).unwrap()
}

fn approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

// ── Segment kinematics ────────────────────────────────────────────────────────

#[cfg(test)]
mod segment_tests {
    use super::*;
    use crate::Segment;

    #[test]
    fn climbing_segment() {
        let a = pt(44.0, -71.0, 100.0, 0.0);
        let b = pt(44.001, -71.0, 110.0, 60.0);
        let s = Segment::between(&a, &b);

        approx(s.distance_m, 111.3195, 0.01);
        assert_eq!(s.elapsed_s, 60.0);
        approx(s.elevation_gain_m, 10.0, 1e-9);
        approx(s.grade_pct, 10.0 / s.distance_m * 100.0, 1e-12);
        approx(s.speed_mps, s.distance_m / 60.0, 1e-12);
        assert!(!s.is_degenerate());
    }

    #[test]
    fn descent_is_negative_grade() {
        let a = pt(44.0, -71.0, 110.0, 0.0);
        let b = pt(44.001, -71.0, 100.0, 60.0);
        let s = Segment::between(&a, &b);
        assert!(s.elevation_gain_m < 0.0);
        assert!(s.grade_pct < 0.0);
    }

    #[test]
    fn stationary_sample_has_zero_grade() {
        let a = pt(44.0, -71.0, 100.0, 0.0);
        let b = pt(44.0, -71.0, 103.0, 30.0);
        let s = Segment::between(&a, &b);
        assert_eq!(s.distance_m, 0.0);
        assert_eq!(s.grade_pct, 0.0);
        assert_eq!(s.speed_mps, 0.0);
        assert_eq!(s.elevation_gain_m, 3.0);
    }

    #[test]
    fn duplicate_timestamp_has_zero_speed() {
        let a = pt(44.0, -71.0, 100.0, 10.0);
        let b = pt(44.001, -71.0, 100.0, 10.0);
        let s = Segment::between(&a, &b);
        assert_eq!(s.elapsed_s, 0.0);
        assert_eq!(s.speed_mps, 0.0);
        assert!(s.distance_m > 0.0);
        assert!(s.is_degenerate());
    }
}

// ── Pack mass model ───────────────────────────────────────────────────────────

#[cfg(test)]
mod pack_tests {
    use hk_core::HkError;

    use crate::{PackLoadProfile, PackMassModel};

    #[test]
    fn linear_depletion() {
        let profile = PackLoadProfile::new(20.0, 10.0, 10).unwrap();
        assert_eq!(profile.mass_loss_per_point(), 1.0);

        let mut pack = PackMassModel::new(profile).unwrap();
        assert_eq!(pack.current_mass_kg(), 20.0);
        for _ in 0..10 {
            pack.advance();
        }
        assert!((pack.current_mass_kg() - 10.0).abs() < 1e-9);
        assert_eq!(pack.advances(), 10);
    }

    #[test]
    fn reset_restores_start_mass() {
        let mut pack = PackMassModel::new(PackLoadProfile::new(20.0, 10.0, 4).unwrap()).unwrap();
        pack.advance();
        pack.advance();
        pack.reset();
        assert_eq!(pack.current_mass_kg(), 20.0);
        assert_eq!(pack.advances(), 0);
    }

    #[test]
    fn resupply_gains_mass() {
        let profile = PackLoadProfile::new(10.0, 14.0, 4).unwrap();
        let mut pack = PackMassModel::new(profile).unwrap();
        pack.advance();
        assert_eq!(pack.current_mass_kg(), 11.0);
    }

    #[test]
    fn too_few_points_rejected() {
        assert!(matches!(
            PackLoadProfile::new(20.0, 10.0, 1),
            Err(HkError::InsufficientPoints(1))
        ));
        assert!(matches!(
            PackLoadProfile::new(20.0, 10.0, 0),
            Err(HkError::InsufficientPoints(0))
        ));
    }

    #[test]
    fn hand_built_short_profile_rejected() {
        for count in [0, 1] {
            let profile = PackLoadProfile { start_mass_kg: 10.0, end_mass_kg: 5.0, total_point_count: count };
            assert!(
                matches!(PackMassModel::new(profile), Err(HkError::InsufficientPoints(c)) if c == count),
                "count {count}"
            );
        }
    }

    #[test]
    fn hand_built_bad_mass_profile_rejected() {
        let nan_start = PackLoadProfile { start_mass_kg: f64::NAN, end_mass_kg: 3.0, total_point_count: 5 };
        let err = PackMassModel::new(nan_start).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("pack_start_kg"), "{err}");

        let negative_end = PackLoadProfile { start_mass_kg: 10.0, end_mass_kg: -3.0, total_point_count: 5 };
        let err = PackMassModel::new(negative_end).unwrap_err();
        assert!(err.to_string().contains("pack_end_kg"), "{err}");

        let infinite = PackLoadProfile { start_mass_kg: f64::INFINITY, end_mass_kg: 0.0, total_point_count: 5 };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn negative_mass_rejected() {
        let err = PackLoadProfile::new(-1.0, 0.0, 10).unwrap_err();
        assert!(err.to_string().contains("pack_start_kg"), "{err}");
    }
}

// ── Pandolf ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pandolf_tests {
    use super::*;
    use crate::{CostModel, Pandolf, Segment};

    const FOUR_MPH: f64 = 1.788_16;

    fn model() -> Pandolf {
        Pandolf::new(lbs_to_kg(150.0), TerrainFactor::LIGHT_BRUSH).unwrap()
    }

    fn pack() -> f64 {
        lbs_to_kg(50.0)
    }

    #[test]
    fn flat_one_hour() {
        let kcal = model().estimate_kcal(pack(), FOUR_MPH, 0.0, 3600.0);
        approx(kcal, 555.0, 1.0);
        approx(kcal, 554.41, 0.01);
    }

    #[test]
    fn six_percent_climb_one_hour() {
        let kcal = model().estimate_kcal(pack(), FOUR_MPH, 6.0, 3600.0);
        approx(kcal, 906.15, 0.01);
    }

    #[test]
    fn two_percent_descent_applies_santee_correction() {
        let m = model();
        let kcal = m.estimate_kcal(pack(), FOUR_MPH, -2.0, 3600.0);
        approx(kcal, 401.97, 0.01);

        // Uncorrected power at the same grade.
        let base_kcal = m.base_watts(pack(), FOUR_MPH, -2.0) / 4184.0 * 3600.0;
        approx(base_kcal, 437.17, 0.01);
        assert!(m.santee_correction(pack(), FOUR_MPH, -2.0) < 0.0);
    }

    #[test]
    fn no_correction_on_flat_or_climb() {
        let m = model();
        assert_eq!(m.santee_correction(pack(), FOUR_MPH, 0.0), 0.0);
        assert_eq!(m.santee_correction(pack(), FOUR_MPH, 4.0), 0.0);
    }

    #[test]
    fn zero_duration_is_zero_energy() {
        assert_eq!(model().estimate_kcal(pack(), FOUR_MPH, 12.0, 0.0), 0.0);
    }

    #[test]
    fn energy_scales_with_duration() {
        let m = model();
        let one = m.estimate_kcal(pack(), FOUR_MPH, 3.0, 600.0);
        let two = m.estimate_kcal(pack(), FOUR_MPH, 3.0, 1200.0);
        approx(two, 2.0 * one, 1e-9);
    }

    #[test]
    fn heavier_terrain_costs_more() {
        let sand = Pandolf::new(lbs_to_kg(150.0), TerrainFactor::LOOSE_SAND).unwrap();
        assert!(
            sand.estimate_kcal(pack(), FOUR_MPH, 0.0, 3600.0)
                > model().estimate_kcal(pack(), FOUR_MPH, 0.0, 3600.0)
        );
    }

    #[test]
    fn trait_matches_inherent() {
        let m = model();
        let seg = Segment {
            distance_m:       FOUR_MPH * 60.0,
            elapsed_s:        60.0,
            elevation_gain_m: FOUR_MPH * 60.0 * 0.06,
            grade_pct:        6.0,
            speed_mps:        FOUR_MPH,
        };
        assert_eq!(m.name(), "pandolf");
        assert_eq!(m.segment_kcal(&seg, pack()), m.estimate_kcal(pack(), FOUR_MPH, 6.0, 60.0));
    }

    #[test]
    fn zero_body_mass_rejected() {
        let err = Pandolf::new(0.0, TerrainFactor::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}

// ── Ludlow-Weyand ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod ludlow_tests {
    use super::*;
    use crate::{CostModel, LudlowWeyand, Segment};

    const FOUR_MPH: f64 = 1.788_16;

    #[test]
    fn flat_one_hour() {
        let kcal = LudlowWeyand::new(&hiker()).estimate_kcal(0.0, FOUR_MPH, 3600.0);
        approx(kcal, 312.00, 0.01);
    }

    #[test]
    fn six_percent_climb_one_hour() {
        let kcal = LudlowWeyand::new(&hiker()).estimate_kcal(6.0, FOUR_MPH, 3600.0);
        approx(kcal, 549.11, 0.01);
    }

    #[test]
    fn descent_clamps_grade_and_adds_flat_penalty() {
        let m = LudlowWeyand::new(&hiker());
        let flat = m.vo2_ml_per_kg_min(0.0, FOUR_MPH);
        assert_eq!(m.vo2_ml_per_kg_min(-2.0, FOUR_MPH), flat + crate::ludlow::C_DECLINE);
        assert_eq!(m.vo2_ml_per_kg_min(-25.0, FOUR_MPH), flat + crate::ludlow::C_DECLINE);
        approx(m.estimate_kcal(-2.0, FOUR_MPH, 3600.0), 326.90, 0.01);
    }

    #[test]
    fn resting_cost_when_stationary() {
        let m = LudlowWeyand::new(&hiker());
        // RMR + minimum walking cost, no speed term.
        let expected = (3.5 + 3.28) * lbs_to_kg(150.0) / 1000.0 * 5.0 * 60.0;
        approx(m.estimate_kcal(0.0, 0.0, 3600.0), expected, 1e-9);
    }

    #[test]
    fn zero_duration_is_zero_energy() {
        assert_eq!(LudlowWeyand::new(&hiker()).estimate_kcal(5.0, FOUR_MPH, 0.0), 0.0);
    }

    #[test]
    fn ignores_pack_mass() {
        let m = LudlowWeyand::new(&hiker());
        let seg = Segment { distance_m: 100.0, elapsed_s: 60.0, grade_pct: 2.0, speed_mps: 1.6, ..Default::default() };
        assert_eq!(m.segment_kcal(&seg, 0.0), m.segment_kcal(&seg, 40.0));
        assert_eq!(m.name(), "ludlow_weyand");
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use hk_track::{GradeProfile, SyntheticTrack};

    use super::*;
    use crate::{
        CalorieEngine, CostModel, DEFAULT_STRIDES, EnergyError, EngineBuilder, RunObserver,
        Segment, SegmentEvent,
    };

    fn engine_for(track: Vec<TrackPoint>, pack_start_lbs: f64, pack_end_lbs: f64) -> CalorieEngine {
        CalorieEngine::new(track, 150.0, pack_start_lbs, pack_end_lbs, Some(1.2), Some(3.5)).unwrap()
    }

    fn hill_track(points: usize) -> Vec<TrackPoint> {
        SyntheticTrack {
            profile: GradeProfile::OutAndBack { grade_pct: 9.0, half_points: points / 2 },
            jitter_m: 1.5,
            elev_jitter_m: 0.8,
            ..Default::default()
        }
        .generate(points)
    }

    #[derive(Default)]
    struct Recorder {
        starts:  usize,
        indices: Vec<usize>,
        packs:   Vec<f64>,
        ends:    usize,
    }

    impl RunObserver for Recorder {
        fn on_run_start(&mut self, _stride: usize, _points: usize) {
            self.starts += 1;
        }

        fn on_segment(&mut self, e: &SegmentEvent<'_>) {
            self.indices.push(e.index);
            self.packs.push(e.pack_mass_kg);
        }

        fn on_run_end(&mut self, _totals: &crate::ModelTotals) {
            self.ends += 1;
        }
    }

    #[test]
    fn two_point_track_scores_one_segment() {
        let a = pt(44.0, -71.0, 100.0, 0.0);
        let b = pt(44.001, -71.0, 104.0, 75.0);
        let engine = engine_for(vec![a, b], 50.0, 40.0);

        let totals = engine.run(1).unwrap();
        assert_eq!(totals.segments_scored, 1);

        // Pack mass at point 1 = start − one point's loss.
        let start = lbs_to_kg(50.0);
        let loss = (start - lbs_to_kg(40.0)) / 2.0;
        let seg = Segment::between(&a, &b);
        assert_eq!(totals.pandolf_kcal, engine.pandolf().segment_kcal(&seg, start - loss));
        assert_eq!(totals.ludlow_weyand_kcal, engine.ludlow_weyand().segment_kcal(&seg, start - loss));
    }

    #[test]
    fn single_point_track_fails_construction() {
        let result = CalorieEngine::new(vec![pt(44.0, -71.0, 0.0, 0.0)], 150.0, 50.0, 40.0, None, Some(3.5));
        let err = result.unwrap_err();
        assert!(err.is_invalid_parameter(), "{err}");
        assert!(matches!(err, EnergyError::Core(hk_core::HkError::InsufficientPoints(1))));
    }

    #[test]
    fn empty_track_fails_construction() {
        let err = CalorieEngine::new(vec![], 150.0, 50.0, 40.0, None, Some(3.5)).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn invalid_body_mass_fails_construction() {
        let track = SyntheticTrack::default().generate(5);
        let err = CalorieEngine::new(track, 0.0, 50.0, 40.0, None, Some(3.5)).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("body_mass_kg"), "{err}");
    }

    #[test]
    fn missing_rmr_fails_construction() {
        let track = SyntheticTrack::default().generate(5);
        let err = CalorieEngine::new(track, 150.0, 50.0, 40.0, None, None).unwrap_err();
        assert!(err.to_string().contains("resting_metabolic_rate"), "{err}");
    }

    #[test]
    fn terrain_below_one_fails_construction() {
        let track = SyntheticTrack::default().generate(5);
        let err = CalorieEngine::new(track, 150.0, 50.0, 40.0, Some(0.5), Some(3.5)).unwrap_err();
        assert!(err.to_string().contains("terrain_factor"), "{err}");
    }

    #[test]
    fn zero_stride_rejected() {
        let engine = engine_for(SyntheticTrack::default().generate(5), 50.0, 40.0);
        assert!(matches!(engine.run(0), Err(EnergyError::InvalidStride(0))));
    }

    #[test]
    fn flat_totals_scale_with_duration() {
        let track = SyntheticTrack { bearing_deg: 0.0, ..Default::default() };
        let short = engine_for(track.generate(101), 30.0, 30.0).run(1).unwrap();
        let long = engine_for(track.generate(201), 30.0, 30.0).run(1).unwrap();

        assert_eq!(long.segments_scored, 2 * short.segments_scored);
        approx(long.elapsed_s, 2.0 * short.elapsed_s, 1e-9);
        approx(long.pandolf_kcal / short.pandolf_kcal, 2.0, 1e-6);
        approx(long.ludlow_weyand_kcal / short.ludlow_weyand_kcal, 2.0, 1e-6);
    }

    #[test]
    fn flat_hour_matches_single_segment_model() {
        // 721 fixes 5 s apart at 4 mph = one hour on the flat.
        let track = SyntheticTrack { bearing_deg: 0.0, ..Default::default() }.generate(721);
        let totals = engine_for(track, 50.0, 50.0).run(1).unwrap();
        approx(totals.elapsed_s, 3600.0, 1e-9);
        approx(totals.pandolf_kcal, 554.41, 0.05);
        approx(totals.ludlow_weyand_kcal, 312.00, 0.05);
    }

    #[test]
    fn zero_duration_segments_contribute_nothing() {
        let a = pt(44.0, -71.0, 100.0, 0.0);
        let b = pt(44.001, -71.0, 101.0, 60.0);
        let c = pt(44.002, -71.0, 102.0, 60.0); // same timestamp as b
        let engine = engine_for(vec![a, b, c], 20.0, 20.0);

        let totals = engine.run(1).unwrap();
        assert_eq!(totals.segments_scored, 2);
        assert!(totals.pandolf_kcal.is_finite());
        assert!(totals.ludlow_weyand_kcal.is_finite());

        let first = Segment::between(&a, &b);
        let pack = lbs_to_kg(20.0);
        approx(totals.pandolf_kcal, engine.pandolf().segment_kcal(&first, pack), 1e-9);
        approx(totals.ludlow_weyand_kcal, engine.ludlow_weyand().segment_kcal(&first, pack), 1e-9);
    }

    #[test]
    fn all_duplicate_timestamps_total_zero() {
        let track = vec![pt(44.0, -71.0, 100.0, 5.0), pt(44.0, -71.0, 100.0, 5.0), pt(44.0, -71.0, 100.0, 5.0)];
        let totals = engine_for(track, 20.0, 10.0).run(1).unwrap();
        assert_eq!(totals.pandolf_kcal, 0.0);
        assert_eq!(totals.ludlow_weyand_kcal, 0.0);
    }

    #[test]
    fn final_pack_mass_is_stride_invariant() {
        let engine = engine_for(hill_track(257), 50.0, 30.0);
        let end = lbs_to_kg(30.0);

        let finals: Vec<f64> = DEFAULT_STRIDES
            .iter()
            .map(|&s| engine.run(s).unwrap().final_pack_mass_kg)
            .collect();
        for f in &finals {
            approx(*f, end, 1e-9);
            assert_eq!(*f, finals[0]);
        }
    }

    #[test]
    fn segment_count_follows_stride() {
        let engine = engine_for(hill_track(101), 50.0, 30.0);
        for &s in &DEFAULT_STRIDES {
            assert_eq!(engine.run(s).unwrap().segments_scored, 100 / s, "stride {s}");
        }
    }

    #[test]
    fn observer_sees_strided_indices_and_pack_at_point() {
        let engine = engine_for(SyntheticTrack::default().generate(10), 50.0, 40.0);
        let mut rec = Recorder::default();
        engine.run_with(3, &mut rec).unwrap();

        assert_eq!(rec.starts, 1);
        assert_eq!(rec.ends, 1);
        assert_eq!(rec.indices, vec![3, 6, 9]);

        let start = lbs_to_kg(50.0);
        let loss = (start - lbs_to_kg(40.0)) / 10.0;
        for (&i, &p) in rec.indices.iter().zip(&rec.packs) {
            approx(p, start - i as f64 * loss, 1e-9);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = engine_for(hill_track(300), 50.0, 30.0);
        let first = engine.run(3).unwrap();
        let _coarser = engine.run(20).unwrap();
        let second = engine.run(3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_matches_individual_runs() {
        let engine = engine_for(hill_track(300), 50.0, 30.0);
        let report = engine.report(&[5, 1, 5, 2]).unwrap();

        assert_eq!(report.strides().collect::<Vec<_>>(), vec![1, 2, 5]);
        for s in [1, 2, 5] {
            assert_eq!(report.get(s).copied(), Some(engine.run(s).unwrap()));
        }
    }

    #[test]
    fn default_report_covers_fixed_strides() {
        let engine = engine_for(hill_track(120), 50.0, 30.0);
        let report = engine.default_report().unwrap();
        assert_eq!(report.strides().collect::<Vec<_>>(), DEFAULT_STRIDES.to_vec());
    }

    #[test]
    fn descent_costs_less_than_climb_under_pandolf() {
        let up = SyntheticTrack { profile: GradeProfile::Constant(8.0), ..Default::default() };
        let down = SyntheticTrack { profile: GradeProfile::Constant(-8.0), ..Default::default() };
        let climb = engine_for(up.generate(50), 30.0, 30.0).run(1).unwrap();
        let descend = engine_for(down.generate(50), 30.0, 30.0).run(1).unwrap();
        assert!(climb.pandolf_kcal > descend.pandolf_kcal);
        assert!(climb.ludlow_weyand_kcal > descend.ludlow_weyand_kcal);
    }

    #[test]
    fn builder_derives_rmr_from_metrics() {
        let engine = EngineBuilder::new(SyntheticTrack::default().generate(20))
            .body_mass_lbs(150.0)
            .pack_lbs(40.0, 35.0)
            .body_metrics(170.0, 40.0, hk_core::Sex::Male)
            .build()
            .unwrap();
        approx(engine.hiker().resting_metabolic_rate(), 3.1597, 1e-3);
        assert_eq!(engine.pandolf().terrain(), TerrainFactor::LIGHT_BRUSH);
    }

    #[test]
    fn builder_explicit_rmr_overrides_metrics() {
        let engine = EngineBuilder::new(SyntheticTrack::default().generate(20))
            .body_mass_kg(70.0)
            .resting_metabolic_rate(4.0)
            .body_metrics(170.0, 40.0, hk_core::Sex::Male)
            .terrain(TerrainFactor::SOFT_SNOW)
            .build()
            .unwrap();
        assert_eq!(engine.hiker().resting_metabolic_rate(), 4.0);
        assert_eq!(engine.pandolf().terrain(), TerrainFactor::SOFT_SNOW);
    }

    #[test]
    fn builder_requires_body_mass() {
        let err = EngineBuilder::new(SyntheticTrack::default().generate(20))
            .resting_metabolic_rate(3.5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("body_mass_kg"), "{err}");
    }

    #[test]
    fn builder_accepts_resolved_hiker() {
        let engine = EngineBuilder::new(SyntheticTrack::default().generate(20))
            .hiker(hiker())
            .build()
            .unwrap();
        assert_eq!(engine.hiker(), &hiker());
        assert_eq!(engine.pack().start_mass_kg, 0.0);
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use crate::{CalorieReport, ModelTotals};

    fn totals(stride: usize, pandolf_kcal: f64, ludlow_weyand_kcal: f64) -> ModelTotals {
        ModelTotals {
            stride,
            pandolf_kcal,
            ludlow_weyand_kcal,
            segments_scored:    0,
            distance_m:         0.0,
            elapsed_s:          0.0,
            final_pack_mass_kg: 0.0,
        }
    }

    #[test]
    fn summary_is_ordered_and_rounded() {
        let mut report = CalorieReport::new();
        report.insert(totals(10, 1500.2, 1010.0));
        report.insert(totals(1, 1523.6, 1049.49));
        report.insert(totals(2, 1519.5, 1040.51));

        let expected = "\
Estimated calories burned at original intervals: Pandolf 1524 kcal, Ludlow-Weyand 1049 kcal\n\
Estimated calories burned downsampled to every 2 points: Pandolf 1520 kcal, Ludlow-Weyand 1041 kcal\n\
Estimated calories burned downsampled to every 10 points: Pandolf 1500 kcal, Ludlow-Weyand 1010 kcal\n";
        assert_eq!(report.summary(), expected);
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn insert_replaces_same_stride() {
        let mut report = CalorieReport::new();
        report.insert(totals(3, 1.0, 1.0));
        report.insert(totals(3, 2.0, 2.0));
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(3).map(|t| t.pandolf_kcal), Some(2.0));
    }

    #[test]
    fn empty_report_has_empty_summary() {
        let report = CalorieReport::new();
        assert!(report.is_empty());
        assert_eq!(report.summary(), "");
    }
}
