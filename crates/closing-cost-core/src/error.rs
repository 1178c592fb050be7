use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClosingCostError {
    #[error("Unknown state code: {code}")]
    UnknownState { code: String },

    #[error("Invalid loan amount: {reason}")]
    InvalidLoanAmount { reason: String },

    #[error("Invalid loan term: {years} years (must be > 0)")]
    InvalidTerm { years: u32 },

    #[error("Invalid fee: {field} = {value} (must be non-negative)")]
    InvalidFee { field: String, value: Decimal },

    #[error("Invalid rate: {field} = {value} (must be non-negative)")]
    InvalidRate { field: String, value: Decimal },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Payload-free classification of a [`ClosingCostError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownState,
    InvalidLoanAmount,
    InvalidTerm,
    InvalidFee,
    InvalidRate,
    InvalidInput,
    Serialization,
}

impl ClosingCostError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClosingCostError::UnknownState { .. } => ErrorKind::UnknownState,
            ClosingCostError::InvalidLoanAmount { .. } => ErrorKind::InvalidLoanAmount,
            ClosingCostError::InvalidTerm { .. } => ErrorKind::InvalidTerm,
            ClosingCostError::InvalidFee { .. } => ErrorKind::InvalidFee,
            ClosingCostError::InvalidRate { .. } => ErrorKind::InvalidRate,
            ClosingCostError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ClosingCostError::SerializationError(_) => ErrorKind::Serialization,
        }
    }

    pub(crate) fn fee(field: &str, value: Decimal) -> Self {
        ClosingCostError::InvalidFee {
            field: field.into(),
            value,
        }
    }

    pub(crate) fn rate(field: &str, value: Decimal) -> Self {
        ClosingCostError::InvalidRate {
            field: field.into(),
            value,
        }
    }
}

impl From<serde_json::Error> for ClosingCostError {
    fn from(e: serde_json::Error) -> Self {
        ClosingCostError::SerializationError(e.to_string())
    }
}

/// Reject a negative fee-like amount.
pub(crate) fn ensure_fee(field: &str, value: Decimal) -> Result<(), ClosingCostError> {
    if value < Decimal::ZERO {
        return Err(ClosingCostError::fee(field, value));
    }
    Ok(())
}

/// Reject a negative rate.
pub(crate) fn ensure_rate(field: &str, value: Decimal) -> Result<(), ClosingCostError> {
    if value < Decimal::ZERO {
        return Err(ClosingCostError::rate(field, value));
    }
    Ok(())
}
