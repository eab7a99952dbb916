//! `hk-output` — report and per-segment output writers.
//!
//! Report files are written once per batch by [`write_report_files`]:
//!
//! | File            | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | `calories.json` | stride → `{"pandolf", "ludlow_weyand"}` rounded kcal     |
//! | `calories.txt`  | the human-readable summary                               |
//! | `calories.csv`  | one row per stride with unrounded totals                 |
//!
//! Per-segment breakdowns come from a [`SegmentOutputObserver`] attached to
//! one stride run.  Two backends implement [`SegmentWriter`]:
//!
//! | Feature   | Backend | File           |
//! |-----------|---------|----------------|
//! | *(none)*  | CSV     | `segments.csv` |
//! | `sqlite`  | SQLite  | `segments.db`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hk_output::{CsvSegmentWriter, SegmentOutputObserver};
//!
//! let writer = CsvSegmentWriter::new(Path::new("./out"))?;
//! let mut obs = SegmentOutputObserver::new(writer);
//! engine.run_with(1, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvSegmentWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SegmentOutputObserver;
pub use report::{
    REPORT_CSV, REPORT_JSON, REPORT_TEXT, report_json, write_report_csv, write_report_files,
    write_report_json, write_report_text,
};
pub use row::{SegmentRow, StrideRow};
pub use writer::SegmentWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSegmentWriter;
