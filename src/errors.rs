use std::result::Result as StdResult;

use thiserror::Error;

/// Input rejections raised by the offer workflow before a breakup is computed.
///
/// The calculator itself never fails; these cover the range checks the
/// workflow performs on user-supplied figures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OfferError {
    #[error("CTC must be a positive finite amount, got {0}")]
    InvalidCtc(f64),
    #[error("TDS must be a non-negative finite amount, got {0}")]
    InvalidTds(f64),
}

pub type Result<T> = StdResult<T, OfferError>;
