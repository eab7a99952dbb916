use hk_core::HkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyError {
    #[error(transparent)]
    Core(#[from] HkError),

    #[error("invalid parameter `stride`: must be >= 1, got {0}")]
    InvalidStride(usize),
}

impl EnergyError {
    /// `true` when the caller supplied a bad parameter or a track too short
    /// to score.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            EnergyError::Core(e) => e.is_invalid_parameter(),
            EnergyError::InvalidStride(_) => true,
        }
    }
}

pub type EnergyResult<T> = Result<T, EnergyError>;
