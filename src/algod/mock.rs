//! In-memory ledger for resolver tests

use super::models::*;
use super::{Ledger, LedgerError};
use crate::address::Address;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct MockLedger {
    local_state: HashMap<(Address, u64), Vec<TealKeyValue>>,
    global_state: HashMap<u64, Vec<TealKeyValue>>,
    boxes: HashMap<u64, Vec<(Vec<u8>, Vec<u8>)>>,
    holdings: HashMap<Address, Vec<u64>>,
    assets: HashMap<u64, AssetParams>,
    failing_boxes: HashSet<u64>,
    failing_assets: HashSet<u64>,
    opted_out: HashSet<(Address, u64)>,
}

pub fn bytes_kv(key: &str, value: &[u8]) -> TealKeyValue {
    TealKeyValue {
        key: STANDARD.encode(key),
        value: TealValue {
            value_type: TEAL_BYTES_TYPE,
            bytes: STANDARD.encode(value),
            uint: 0,
        },
    }
}

pub fn uint_kv(key: &str, value: u64) -> TealKeyValue {
    TealKeyValue {
        key: STANDARD.encode(key),
        value: TealValue {
            value_type: TEAL_UINT_TYPE,
            bytes: String::new(),
            uint: value,
        },
    }
}

pub fn nfd_asset(name: &str) -> AssetParams {
    AssetParams {
        creator: String::new(),
        decimals: 0,
        total: 1,
        name: Some(name.to_string()),
        unit_name: Some("NFD".to_string()),
    }
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_state(mut self, address: Address, app_id: u64, kv: Vec<TealKeyValue>) -> Self {
        self.local_state.insert((address, app_id), kv);
        self
    }

    pub fn with_global_state(mut self, app_id: u64, kv: Vec<TealKeyValue>) -> Self {
        self.global_state.insert(app_id, kv);
        self
    }

    pub fn with_box(mut self, app_id: u64, name: &[u8], value: &[u8]) -> Self {
        self.boxes
            .entry(app_id)
            .or_default()
            .push((name.to_vec(), value.to_vec()));
        self
    }

    pub fn with_holding(mut self, address: Address, asset_id: u64) -> Self {
        self.holdings.entry(address).or_default().push(asset_id);
        self
    }

    pub fn with_asset(mut self, asset_id: u64, params: AssetParams) -> Self {
        self.assets.insert(asset_id, params);
        self
    }

    /// `address` exists but has no local state for `app_id`.
    pub fn with_opted_out(mut self, address: Address, app_id: u64) -> Self {
        self.opted_out.insert((address, app_id));
        self
    }

    /// Box reads for `app_id` fail with an HTTP 500.
    pub fn failing_boxes(mut self, app_id: u64) -> Self {
        self.failing_boxes.insert(app_id);
        self
    }

    pub fn failing_asset(mut self, asset_id: u64) -> Self {
        self.failing_assets.insert(asset_id);
        self
    }

    fn server_error() -> LedgerError {
        LedgerError::Http {
            status: 500,
            message: "internal error".to_string(),
        }
    }
}

impl Ledger for MockLedger {
    fn account_application_info(
        &self,
        address: &Address,
        app_id: u64,
    ) -> Result<AccountApplicationInfo, LedgerError> {
        if self.opted_out.contains(&(*address, app_id)) {
            return Ok(AccountApplicationInfo {
                app_local_state: None,
            });
        }
        let kv = self
            .local_state
            .get(&(*address, app_id))
            .ok_or_else(|| LedgerError::NotFound(format!("account {} app {}", address, app_id)))?;
        Ok(AccountApplicationInfo {
            app_local_state: Some(ApplicationLocalState {
                id: app_id,
                key_value: kv.clone(),
            }),
        })
    }

    fn application_info(&self, app_id: u64) -> Result<Application, LedgerError> {
        let kv = self
            .global_state
            .get(&app_id)
            .ok_or_else(|| LedgerError::NotFound(format!("application {}", app_id)))?;
        Ok(Application {
            id: app_id,
            params: ApplicationParams {
                creator: String::new(),
                global_state: kv.clone(),
            },
        })
    }

    fn application_box_by_name(&self, app_id: u64, name: &[u8]) -> Result<BoxValue, LedgerError> {
        if self.failing_boxes.contains(&app_id) {
            return Err(Self::server_error());
        }
        self.boxes
            .get(&app_id)
            .and_then(|boxes| boxes.iter().find(|(n, _)| n == name))
            .map(|(n, v)| BoxValue {
                name: STANDARD.encode(n),
                value: STANDARD.encode(v),
                round: 1,
            })
            .ok_or_else(|| LedgerError::NotFound(format!("box in application {}", app_id)))
    }

    fn application_boxes(&self, app_id: u64) -> Result<BoxesResponse, LedgerError> {
        if self.failing_boxes.contains(&app_id) {
            return Err(Self::server_error());
        }
        let boxes = self
            .boxes
            .get(&app_id)
            .map(|boxes| {
                boxes
                    .iter()
                    .map(|(n, _)| BoxDescriptor {
                        name: STANDARD.encode(n),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(BoxesResponse { boxes })
    }

    fn account_info(&self, address: &Address) -> Result<Account, LedgerError> {
        let assets = self
            .holdings
            .get(address)
            .ok_or_else(|| LedgerError::NotFound(format!("account {}", address)))?;
        Ok(Account {
            address: address.to_string(),
            assets: assets
                .iter()
                .map(|id| AssetHolding {
                    asset_id: *id,
                    amount: 1,
                    is_frozen: false,
                })
                .collect(),
        })
    }

    fn asset_info(&self, asset_id: u64) -> Result<Asset, LedgerError> {
        if self.failing_assets.contains(&asset_id) {
            return Err(Self::server_error());
        }
        let params = self
            .assets
            .get(&asset_id)
            .ok_or_else(|| LedgerError::NotFound(format!("asset {}", asset_id)))?;
        Ok(Asset {
            index: asset_id,
            params: params.clone(),
        })
    }
}
