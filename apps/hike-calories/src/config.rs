//! Command-line hike parameters and their validated form.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueHint};

use hk_core::{Hiker, Sex, TerrainFactor, TrackPoint, lbs_to_kg};
use hk_energy::{CalorieEngine, DEFAULT_STRIDES, EnergyResult, EngineBuilder};

// ── Demo defaults ─────────────────────────────────────────────────────────────

const DEMO_BODY_WEIGHT_LBS: f64 = 150.0;
const DEMO_PACK_START_LBS:  f64 = 50.0;
const DEMO_PACK_END_LBS:    f64 = 38.0;
const DEMO_RMR:             f64 = 3.5;

/// Hiker, pack, and output options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct HikeArgs {
    /// Body weight in pounds
    #[arg(short = 'w', long = "body-weight")]
    pub body_weight: Option<f64>,

    /// Pack weight at the start of the hike, pounds [default: 0]
    #[arg(short = 'p', long)]
    pub pack_start: Option<f64>,

    /// Pack weight at the end of the hike, pounds [default: the start weight]
    #[arg(short = 'P', long)]
    pub pack_end: Option<f64>,

    /// Height in centimetres (derives RMR when --rmr is not given)
    #[arg(short = 'H', long)]
    pub height: Option<f64>,

    /// Age in years (derives RMR when --rmr is not given)
    #[arg(short, long)]
    pub age: Option<f64>,

    /// Resting metabolic rate, ml O2 / kg / min
    #[arg(short = 'R', long)]
    pub rmr: Option<f64>,

    /// Use the male Mifflin–St Jeor constant when deriving RMR
    #[arg(short, long)]
    pub male: bool,

    /// Pandolf terrain factor: a number >= 1.0 or a surface preset
    /// (blacktop, dirt-road, light-brush, heavy-brush, swamp, loose-sand, soft-snow)
    #[arg(short, long, default_value = "1.2", value_parser = parse_terrain)]
    pub terrain_factor: TerrainFactor,

    /// Downsampling strides to report, comma separated [default: 1,2,3,4,5,8,10,12,20]
    #[arg(long, value_delimiter = ',', value_parser = parse_stride)]
    pub strides: Vec<usize>,

    /// Directory for calories.json, calories.txt and calories.csv
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Also write a per-segment breakdown for this stride
    #[arg(long, value_name = "STRIDE", value_parser = parse_stride)]
    pub segments: Option<usize>,
}

impl HikeArgs {
    /// Fill hiker and pack inputs the demo can invent.
    pub fn with_demo_defaults(mut self) -> Self {
        self.body_weight.get_or_insert(DEMO_BODY_WEIGHT_LBS);
        if self.pack_start.is_none() && self.pack_end.is_none() {
            self.pack_start = Some(DEMO_PACK_START_LBS);
            self.pack_end = Some(DEMO_PACK_END_LBS);
        }
        if self.rmr.is_none() && (self.height.is_none() || self.age.is_none()) {
            self.rmr = Some(DEMO_RMR);
        }
        self
    }
}

fn parse_terrain(s: &str) -> Result<TerrainFactor, String> {
    if let Some(preset) = TerrainFactor::preset(s) {
        return Ok(preset);
    }
    let n: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is neither a number nor a terrain preset"))?;
    TerrainFactor::new(n).map_err(|e| e.to_string())
}

fn parse_stride(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("stride must be at least 1".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("`{s}`: {e}")),
    }
}

// ── EstimateConfig ────────────────────────────────────────────────────────────

/// Fully resolved inputs for one estimate.
#[derive(Clone, Debug)]
pub struct EstimateConfig {
    pub hiker:           Hiker,
    pub pack_start_lbs:  f64,
    pub pack_end_lbs:    f64,
    pub terrain:         TerrainFactor,
    /// Increasing, deduplicated.
    pub strides:         Vec<usize>,
    pub output_dir:      PathBuf,
    pub segments_stride: Option<usize>,
}

impl EstimateConfig {
    /// Apply defaults and validate; the error names the missing or invalid
    /// parameter.
    pub fn from_args(args: &HikeArgs) -> Result<Self> {
        let body_weight = args
            .body_weight
            .context("missing required parameter: body weight (-w/--body-weight, pounds)")?;
        if !body_weight.is_finite() || body_weight <= 0.0 {
            bail!("invalid body weight {body_weight} lb: must be > 0");
        }

        let sex = if args.male { Sex::Male } else { Sex::Female };
        let hiker = Hiker::resolve(lbs_to_kg(body_weight), args.rmr, args.height, args.age, sex)
            .context("cannot determine resting metabolic rate: give -R/--rmr, or -H/--height and -a/--age")?;

        let pack_start_lbs = args.pack_start.unwrap_or(0.0);
        let pack_end_lbs = args.pack_end.unwrap_or(pack_start_lbs);

        let mut strides = if args.strides.is_empty() {
            DEFAULT_STRIDES.to_vec()
        } else {
            args.strides.clone()
        };
        strides.sort_unstable();
        strides.dedup();

        Ok(Self {
            hiker,
            pack_start_lbs,
            pack_end_lbs,
            terrain: args.terrain_factor,
            strides,
            output_dir: args.output_dir.clone(),
            segments_stride: args.segments,
        })
    }

    /// Build the engine for `track`.
    pub fn engine(&self, track: Vec<TrackPoint>) -> EnergyResult<CalorieEngine> {
        EngineBuilder::new(track)
            .hiker(self.hiker)
            .pack_lbs(self.pack_start_lbs, self.pack_end_lbs)
            .terrain(self.terrain)
            .build()
    }
}
