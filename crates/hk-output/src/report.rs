//! Batch report files: `calories.json`, `calories.txt`, `calories.csv`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::Writer;
use hk_energy::CalorieReport;
use serde::Serialize;
use tracing::info;

use crate::{OutputResult, StrideRow};

pub const REPORT_JSON: &str = "calories.json";
pub const REPORT_TEXT: &str = "calories.txt";
pub const REPORT_CSV:  &str = "calories.csv";

/// Rounded per-model totals for one stride, as stored in `calories.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct StrideKcal {
    pandolf:       i64,
    ludlow_weyand: i64,
}

/// The JSON document written to `calories.json`.
///
/// Keys are strides as strings in increasing numeric order.
pub fn report_json(report: &CalorieReport) -> OutputResult<String> {
    // Integer keys keep numeric order; serde_json emits them as strings.
    let doc: BTreeMap<usize, StrideKcal> = report
        .iter()
        .map(|t| {
            let kcal = StrideKcal {
                pandolf:       t.pandolf_rounded(),
                ludlow_weyand: t.ludlow_weyand_rounded(),
            };
            (t.stride, kcal)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn write_report_json(path: &Path, report: &CalorieReport) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(report_json(report)?.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Writes exactly [`CalorieReport::summary`].
pub fn write_report_text(path: &Path, report: &CalorieReport) -> OutputResult<()> {
    fs::write(path, report.summary())?;
    Ok(())
}

pub fn write_report_csv(path: &Path, report: &CalorieReport) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["stride", "segments", "pandolf_kcal", "ludlow_weyand_kcal", "final_pack_mass_kg"])?;
    for row in report.iter().map(StrideRow::from) {
        w.write_record(&[
            row.stride.to_string(),
            row.segments.to_string(),
            row.pandolf_kcal.to_string(),
            row.ludlow_weyand_kcal.to_string(),
            row.final_pack_mass_kg.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write all three report files into `dir`, creating it if needed.
///
/// Returns the paths written, in JSON, text, CSV order.
pub fn write_report_files(dir: &Path, report: &CalorieReport) -> OutputResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let json = dir.join(REPORT_JSON);
    let text = dir.join(REPORT_TEXT);
    let csv = dir.join(REPORT_CSV);

    write_report_json(&json, report)?;
    write_report_text(&text, report)?;
    write_report_csv(&csv, report)?;

    info!(dir = %dir.display(), strides = report.len(), "wrote report files");
    Ok(vec![json, text, csv])
}
