use thiserror::Error;

/// Core error type.
///
/// The generator and emitter are infallible; errors only come out of the
/// conversation store (unknown ids). `InvalidInput` and `EmissionAborted`
/// are reserved variants: classification falls back to the general category
/// instead of raising, and there is no cancellation API yet.
#[derive(Debug, Error)]
pub enum AxiaoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Emission aborted: {0}")]
    EmissionAborted(String),
}

pub type AxiaoResult<T> = Result<T, AxiaoError>;
