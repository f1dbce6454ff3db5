use thiserror::Error;

/// Reasons a sum cannot be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    #[error("invalid number format: \"{0}\"")]
    InvalidNumberFormat(String),

    #[error("negatives not allowed: {}", join_values(.0))]
    NegativeValues(Vec<i64>),
}

impl SumError {
    /// Offending values for `NegativeValues`, empty otherwise.
    pub fn negatives(&self) -> &[i64] {
        match self {
            SumError::NegativeValues(values) => values,
            SumError::InvalidNumberFormat(_) => &[],
        }
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
