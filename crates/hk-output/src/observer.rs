//! `SegmentOutputObserver<W>` — bridges `RunObserver` to a `SegmentWriter`.

use hk_energy::{ModelTotals, RunObserver, SegmentEvent};

use crate::row::SegmentRow;
use crate::writer::SegmentWriter;
use crate::{OutputError, OutputResult};

/// Rows buffered before a batch write.
const BATCH_ROWS: usize = 1_024;

/// A [`RunObserver`] that writes every scored segment to any
/// [`SegmentWriter`] backend.
///
/// Rows are buffered and written in batches; the final batch is written and
/// the writer finished in `on_run_end`.  Writer errors are stored because
/// observer hooks have no return value: check
/// [`take_error`][Self::take_error] after the run returns.  After the first
/// error no further rows are written.
pub struct SegmentOutputObserver<W: SegmentWriter> {
    writer:     W,
    buffer:     Vec<SegmentRow>,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: SegmentWriter> SegmentOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer:     Vec::with_capacity(BATCH_ROWS),
            rows:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Segment rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() || self.last_error.is_some() {
            self.buffer.clear();
            return;
        }
        let result = self.writer.write_segments(&self.buffer);
        if result.is_ok() {
            self.rows += self.buffer.len();
        }
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SegmentWriter> RunObserver for SegmentOutputObserver<W> {
    fn on_segment(&mut self, event: &SegmentEvent<'_>) {
        self.buffer.push(SegmentRow::from(event));
        if self.buffer.len() >= BATCH_ROWS {
            self.flush();
        }
    }

    fn on_run_end(&mut self, _totals: &ModelTotals) {
        self.flush();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
