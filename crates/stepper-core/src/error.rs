use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepperError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("invalid step {0}: must be finite")]
    InvalidStep(f64),
    #[error("bound is NaN")]
    NanBound,
}

pub type Result<T> = std::result::Result<T, StepperError>;
