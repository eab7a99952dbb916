use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GPX parse error: {0}")]
    Gpx(String),

    #[error("invalid timestamp at point {index}: {reason}")]
    BadTime { index: usize, reason: String },

    #[error("point {0} has no timestamp")]
    MissingTime(usize),

    #[error("unsupported track format {0:?}: expected .gpx or .csv")]
    UnsupportedFormat(String),

    #[error("track contains no points")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrackResult<T> = Result<T, TrackError>;
