//! Error types for NFD resolution

use crate::address::AddressError;
use crate::algod::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NfdError {
    /// A retrieved payload has a length or encoding the registry never produces.
    #[error("malformed registry data: {0}")]
    MalformedData(String),

    /// An expected key is absent from an otherwise readable state.
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
}

pub type Result<T> = std::result::Result<T, NfdError>;
