//! Error types for the calculation engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("No feasible allocation: {0}")]
    Infeasible(String),

    #[error("Budget model is unbounded")]
    Unbounded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<minilp::Error> for EngineError {
    fn from(value: minilp::Error) -> Self {
        match value {
            minilp::Error::Infeasible => EngineError::Infeasible(
                "spending bounds, essential floors and the savings goal cannot all be met"
                    .to_string(),
            ),
            minilp::Error::Unbounded => EngineError::Unbounded,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
