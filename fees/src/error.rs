use thiserror::Error;

use crate::dec::Dec;
use crate::ParamKey;

/// Coarse classification of a parameter rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamErrorKind {
    /// The supplied value has the wrong kind for the field.
    Type,
    /// A required decimal field was null or missing.
    Nil,
    /// The value falls outside the allowed numeric range.
    Range,
}

/// Why a candidate parameter value was rejected.
///
/// Every failure is reported to the caller immediately; the governance layer
/// acting on the error is responsible for rejecting the proposal. Nothing is
/// retried and no partial field update takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("invalid type for {key}: expected {expected}, got {found}")]
    Type {
        key: ParamKey,
        expected: &'static str,
        found: String,
    },
    #[error("invalid parameter {key}: nil value")]
    Nil { key: ParamKey },
    #[error("{key} cannot be negative: {value}")]
    Negative { key: ParamKey, value: Dec },
    #[error("{key} cannot be greater than 1: {value}")]
    GreaterThanOne { key: ParamKey, value: Dec },
    #[error("total shares cannot be greater than 1: {developer} + {validator}")]
    TotalSharesExceedOne { developer: Dec, validator: Dec },
}

impl ParamError {
    pub fn kind(&self) -> ParamErrorKind {
        match self {
            ParamError::Type { .. } => ParamErrorKind::Type,
            ParamError::Nil { .. } => ParamErrorKind::Nil,
            ParamError::Negative { .. }
            | ParamError::GreaterThanOne { .. }
            | ParamError::TotalSharesExceedOne { .. } => ParamErrorKind::Range,
        }
    }
}
