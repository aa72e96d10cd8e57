//! Ledger access used by the resolver.
//!
//! The resolver only depends on the [`Ledger`] trait; [`AlgodClient`] is the
//! blocking HTTP implementation backed by an algod node.

pub mod client;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use client::AlgodClient;
pub use models::*;

use crate::address::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// The requested account state, application, box or asset does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }
}

/// Turn a ledger "not found" into `Ok(None)`, passing every other error through.
pub fn found<T>(result: Result<T, LedgerError>) -> Result<Option<T>, LedgerError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read-only view of the ledger needed for NFD resolution.
pub trait Ledger {
    /// Local state of `address` for application `app_id`.
    fn account_application_info(
        &self,
        address: &Address,
        app_id: u64,
    ) -> Result<AccountApplicationInfo, LedgerError>;

    fn application_info(&self, app_id: u64) -> Result<Application, LedgerError>;

    fn application_box_by_name(&self, app_id: u64, name: &[u8]) -> Result<BoxValue, LedgerError>;

    /// Names of every box held by `app_id`.
    fn application_boxes(&self, app_id: u64) -> Result<BoxesResponse, LedgerError>;

    fn account_info(&self, address: &Address) -> Result<Account, LedgerError>;

    fn asset_info(&self, asset_id: u64) -> Result<Asset, LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn account_application_info(
        &self,
        address: &Address,
        app_id: u64,
    ) -> Result<AccountApplicationInfo, LedgerError> {
        (**self).account_application_info(address, app_id)
    }

    fn application_info(&self, app_id: u64) -> Result<Application, LedgerError> {
        (**self).application_info(app_id)
    }

    fn application_box_by_name(&self, app_id: u64, name: &[u8]) -> Result<BoxValue, LedgerError> {
        (**self).application_box_by_name(app_id, name)
    }

    fn application_boxes(&self, app_id: u64) -> Result<BoxesResponse, LedgerError> {
        (**self).application_boxes(app_id)
    }

    fn account_info(&self, address: &Address) -> Result<Account, LedgerError> {
        (**self).account_info(address)
    }

    fn asset_info(&self, asset_id: u64) -> Result<Asset, LedgerError> {
        (**self).asset_info(asset_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_maps_only_not_found() {
        assert_eq!(found(Ok::<_, LedgerError>(3)).unwrap(), Some(3));
        assert_eq!(
            found::<u8>(Err(LedgerError::NotFound("box".into()))).unwrap(),
            None
        );
        let err = found::<u8>(Err(LedgerError::Http {
            status: 500,
            message: "boom".into(),
        }))
        .unwrap_err();
        assert!(!err.is_not_found());
    }
}
