//! CSV segment backend.
//!
//! Creates `segments.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::SegmentWriter;
use crate::{OutputResult, SegmentRow};

pub const SEGMENTS_CSV: &str = "segments.csv";

pub(crate) const SEGMENT_HEADER: [&str; 10] = [
    "stride",
    "index",
    "distance_m",
    "elapsed_s",
    "elevation_gain_m",
    "grade_pct",
    "speed_mps",
    "pack_mass_kg",
    "pandolf_kcal",
    "ludlow_weyand_kcal",
];

/// Writes segment rows to a CSV file, one row per segment, tagged with the
/// stride that scored it.
pub struct CsvSegmentWriter {
    segments: Writer<File>,
    finished: bool,
}

impl CsvSegmentWriter {
    /// Create (or truncate) `segments.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut segments = Writer::from_path(dir.join(SEGMENTS_CSV))?;
        segments.write_record(SEGMENT_HEADER)?;
        Ok(Self { segments, finished: false })
    }
}

impl SegmentWriter for CsvSegmentWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.stride.to_string(),
                row.index.to_string(),
                row.distance_m.to_string(),
                row.elapsed_s.to_string(),
                row.elevation_gain_m.to_string(),
                row.grade_pct.to_string(),
                row.speed_mps.to_string(),
                row.pack_mass_kg.to_string(),
                row.pandolf_kcal.to_string(),
                row.ludlow_weyand_kcal.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.segments.flush()?;
        Ok(())
    }
}
