//! The `SegmentWriter` trait implemented by all segment backends.

use crate::{OutputResult, SegmentRow};

/// Trait implemented by the CSV and SQLite segment writers.
///
/// Errors are returned to the caller; [`SegmentOutputObserver`] stores them
/// because observer hooks have no return value.
///
/// [`SegmentOutputObserver`]: crate::SegmentOutputObserver
pub trait SegmentWriter {
    /// Write a batch of segment rows.
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
