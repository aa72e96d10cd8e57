//! NFD resolver supporting both registry layouts.
//!
//! Every lookup first probes the V2 box of the registry application and falls
//! back to the V1 logic signature account only when the ledger reports the box
//! as not found. Any other ledger failure is returned to the caller.

use crate::address::Address;
use crate::algod::{found, AlgodClient, AssetParams, Ledger};
use crate::codec::{read_u64_be, unpack_uints};
use crate::config::{ClientConfig, Network};
use crate::error::{NfdError, Result};
use crate::registry::constants::*;
use crate::registry::lsig::LookupKey;
use crate::registry::properties::{fetch_name, PropertySet};
use crate::registry::state::{decode_box_name, decode_box_value, decode_state_entries, RawState};
use log::{debug, warn};
use std::time::Duration;

pub struct NfdClient<L: Ledger = AlgodClient> {
    ledger: L,
    registry_app_id: u64,
}

impl NfdClient<AlgodClient> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let algod = AlgodClient::with_timeout(
            &config.algod_url,
            config.algod_token.as_deref(),
            Duration::from_secs(config.timeout_secs),
        )?;
        debug!(
            "Creating NFD client for {} (registry {}) via {}",
            config.network,
            config.registry_app_id(),
            config.algod_url
        );
        Ok(Self::new(algod, config.registry_app_id()))
    }

    /// Client for the mainnet registry over the public algonode endpoint
    pub fn mainnet() -> Result<Self> {
        Self::from_config(&ClientConfig::for_network(Network::Mainnet))
    }

    /// Client for the testnet registry over the public algonode endpoint
    pub fn testnet() -> Result<Self> {
        Self::from_config(&ClientConfig::for_network(Network::Testnet))
    }
}

impl<L: Ledger> NfdClient<L> {
    pub fn new(ledger: L, registry_app_id: u64) -> Self {
        Self {
            ledger,
            registry_app_id,
        }
    }

    pub fn for_network(ledger: L, network: Network) -> Self {
        Self::new(ledger, network.registry_app_id())
    }

    pub fn registry_app_id(&self) -> u64 {
        self.registry_app_id
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Contents of a registry box, `None` when it does not exist
    fn registry_box(&self, name: &[u8]) -> Result<Option<Vec<u8>>> {
        match found(self.ledger.application_box_by_name(self.registry_app_id, name))? {
            Some(value) => Ok(Some(decode_box_value(&value)?)),
            None => Ok(None),
        }
    }

    /// Registry local state of a lookup account, `None` when the account is
    /// unknown or not opted in
    fn registry_local_state(&self, account: &Address) -> Result<Option<RawState>> {
        let info = found(
            self.ledger
                .account_application_info(account, self.registry_app_id),
        )?;
        match info.and_then(|info| info.app_local_state) {
            Some(local) => Ok(Some(decode_state_entries(&local.key_value)?)),
            None => Ok(None),
        }
    }

    /// Application id of the NFD called `name`
    pub fn find_app_id_by_name(&self, name: &str) -> Result<Option<u64>> {
        let key = LookupKey::Name(name.to_string());
        if let Some(value) = self.registry_box(&key.box_key())? {
            if value.len() != NAME_BOX_LENGTH {
                return Err(NfdError::MalformedData(format!(
                    "name box for {} holds {} bytes, expected {}",
                    name,
                    value.len(),
                    NAME_BOX_LENGTH
                )));
            }
            let app_id = read_u64_be(&value[8..])?;
            debug!("{} resolved to app {} via box", name, app_id);
            return Ok(Some(app_id));
        }

        let account = key.lsig_address(self.registry_app_id);
        debug!("No name box for {}, trying lookup account {}", name, account);
        let Some(state) = self.registry_local_state(&account)? else {
            return Ok(None);
        };
        let bytes = state
            .get_bytes(APP_ID_KEY)
            .ok_or_else(|| NfdError::MissingField(APP_ID_KEY.to_string()))?;
        let app_id = read_u64_be(bytes)?;
        debug!("{} resolved to app {} via local state", name, app_id);
        Ok(Some(app_id))
    }

    /// Application ids of every NFD that lists `address`
    pub fn find_app_ids_by_address(&self, address: &Address) -> Result<Option<Vec<u64>>> {
        let key = LookupKey::Address(*address);
        if let Some(value) = self.registry_box(&key.box_key())? {
            let app_ids = unpack_uints(&value)?;
            debug!("{} resolved to {} apps via box", address, app_ids.len());
            return Ok(Some(app_ids));
        }

        let account = key.lsig_address(self.registry_app_id);
        debug!("No address box for {}, trying lookup account {}", address, account);
        let Some(state) = self.registry_local_state(&account)? else {
            return Ok(None);
        };

        // Slots are filled in order; the first empty one ends the list.
        let mut app_ids = Vec::new();
        for slot in 0..APP_IDS_SLOT_COUNT {
            let slot_key = format!("{}{}", APP_IDS_SLOT_PREFIX, slot);
            let ids = match state.get_bytes(&slot_key) {
                Some(bytes) => unpack_uints(bytes)?,
                None => break,
            };
            if ids.is_empty() {
                break;
            }
            app_ids.extend(ids);
        }
        debug!("{} resolved to {} apps via local state", address, app_ids.len());
        Ok(Some(app_ids))
    }

    /// Global state of an NFD application with all of its boxes merged on top
    pub fn fetch_entry_state(&self, app_id: u64) -> Result<RawState> {
        let app = self.ledger.application_info(app_id)?;
        let mut state = decode_state_entries(&app.params.global_state)?;

        for descriptor in self.ledger.application_boxes(app_id)?.boxes {
            let name = decode_box_name(&descriptor)?;
            let value = self.ledger.application_box_by_name(app_id, &name)?;
            state.merge_box(name, decode_box_value(&value)?);
        }
        Ok(state)
    }

    /// Forward lookup: properties of the NFD called `name`, `None` if unregistered
    pub fn lookup_name(&self, name: &str) -> Result<Option<PropertySet>> {
        let name = name.trim().to_lowercase();
        let Some(app_id) = self.find_app_id_by_name(&name)? else {
            debug!("{} is not registered", name);
            return Ok(None);
        };
        let state = self.fetch_entry_state(app_id)?;
        Ok(Some(PropertySet::from_state(app_id, &state)?))
    }

    /// Reverse lookup: names of every NFD that lists `address`
    pub fn lookup_address(&self, address: &str) -> Result<Vec<String>> {
        let address: Address = address.parse()?;
        let app_ids = self.find_app_ids_by_address(&address)?.unwrap_or_default();

        let mut names = Vec::with_capacity(app_ids.len());
        for app_id in app_ids {
            let state = self.fetch_entry_state(app_id)?;
            names.push(fetch_name(&state)?);
        }
        Ok(names)
    }

    /// Names of NFD assets held by `address` whose registry owner is `address`
    pub fn lookup_opted_and_owned_by(&self, address: &str) -> Result<Vec<String>> {
        let address: Address = address.parse()?;
        let account = self.ledger.account_info(&address)?;

        let mut names = Vec::new();
        for holding in account.assets {
            let asset = match self.ledger.asset_info(holding.asset_id) {
                Ok(asset) => asset,
                Err(e) => {
                    warn!("Skipping asset {}: {}", holding.asset_id, e);
                    continue;
                }
            };
            if !is_nfd_asset(&asset.params) {
                continue;
            }
            let Some(name) = asset.params.name else {
                continue;
            };

            match self.lookup_name(&name) {
                Ok(Some(properties)) if properties.owner() == Some(&address) => {
                    names.push(properties.name)
                }
                Ok(_) => debug!("{} is held but not owned by {}", name, address),
                Err(e) => warn!("Skipping {} (asset {}): {}", name, holding.asset_id, e),
            }
        }
        Ok(names)
    }
}

/// Every NFD is minted as a single indivisible unit named `NFD`
fn is_nfd_asset(params: &AssetParams) -> bool {
    params.unit_name.as_deref() == Some(NFD_ASSET_UNIT_NAME) && params.decimals == 0 && params.total == 1
}
