//! SQLite segment backend (feature `sqlite`).
//!
//! Creates `segments.db` in the configured output directory with one table,
//! `segments`, keyed by `(stride, idx)`.  Several stride runs may share one
//! database; re-running a stride replaces its rows.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::SegmentWriter;
use crate::{OutputResult, SegmentRow};

pub const SEGMENTS_DB: &str = "segments.db";

/// Writes segment rows to an SQLite database.
pub struct SqliteSegmentWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteSegmentWriter {
    /// Open (or create) `segments.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(SEGMENTS_DB))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS segments (
                 stride             INTEGER NOT NULL,
                 idx                INTEGER NOT NULL,
                 distance_m         REAL    NOT NULL,
                 elapsed_s          REAL    NOT NULL,
                 elevation_gain_m   REAL    NOT NULL,
                 grade_pct          REAL    NOT NULL,
                 speed_mps          REAL    NOT NULL,
                 pack_mass_kg       REAL    NOT NULL,
                 pandolf_kcal       REAL    NOT NULL,
                 ludlow_weyand_kcal REAL    NOT NULL,
                 PRIMARY KEY (stride, idx)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl SegmentWriter for SqliteSegmentWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO segments \
                 (stride, idx, distance_m, elapsed_s, elevation_gain_m, grade_pct, \
                  speed_mps, pack_mass_kg, pandolf_kcal, ludlow_weyand_kcal) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.stride as i64,
                    row.index as i64,
                    row.distance_m,
                    row.elapsed_s,
                    row.elevation_gain_m,
                    row.grade_pct,
                    row.speed_mps,
                    row.pack_mass_kg,
                    row.pandolf_kcal,
                    row.ludlow_weyand_kcal,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
