//! Address properties of a single NFD application.
//!
//! Keys ending in `.a` hold one packed address (`i.owner.a`, `i.seller.a`);
//! keys ending in `.as` hold up to three packed addresses with zero padding
//! (`v.caAlgo.0.as`). Everything else is metadata and is not interpreted here.

use super::constants::{ADDRESS_LIST_SUFFIX, ADDRESS_SUFFIX, NAME_KEY, OWNER_KEY};
use super::state::{RawState, StateValue};
use crate::address::Address;
use crate::codec::unpack_addresses;
use crate::error::{NfdError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Address(Address),
    Addresses(Vec<Address>),
}

/// Decoded view of one NFD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySet {
    pub app_id: u64,
    pub name: String,
    /// Account controlled by the NFD application itself.
    pub vault: Address,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl PropertySet {
    pub fn from_state(app_id: u64, state: &RawState) -> Result<Self> {
        Ok(Self {
            app_id,
            name: fetch_name(state)?,
            vault: Address::for_application(app_id),
            properties: fetch_addresses(state)?,
        })
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn owner(&self) -> Option<&Address> {
        match self.properties.get(OWNER_KEY)? {
            PropertyValue::Address(address) => Some(address),
            PropertyValue::Addresses(_) => None,
        }
    }
}

pub fn fetch_name(state: &RawState) -> Result<String> {
    let bytes = state
        .get_bytes(NAME_KEY)
        .ok_or_else(|| NfdError::MissingField(NAME_KEY.to_string()))?;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| NfdError::MalformedData(format!("{} is not valid UTF-8", NAME_KEY)))
}

pub fn fetch_addresses(state: &RawState) -> Result<BTreeMap<String, PropertyValue>> {
    let mut properties = BTreeMap::new();
    for (key, value) in state.iter() {
        let (Some(key), StateValue::Bytes(bytes)) = (key.as_text(), value) else {
            continue;
        };
        if key.ends_with(ADDRESS_SUFFIX) {
            let address = Address::from_slice(bytes).ok_or_else(|| {
                NfdError::MalformedData(format!(
                    "{} holds {} bytes, expected an address",
                    key,
                    bytes.len()
                ))
            })?;
            properties.insert(key.to_string(), PropertyValue::Address(address));
        } else if key.ends_with(ADDRESS_LIST_SUFFIX) {
            properties.insert(key.to_string(), PropertyValue::Addresses(unpack_addresses(bytes)?));
        }
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algod::mock::{bytes_kv, uint_kv};
    use crate::registry::state::decode_state_entries;

    fn owner() -> Address {
        Address::new([1u8; 32])
    }

    #[test]
    fn test_fetch_name() {
        let state = decode_state_entries(&[bytes_kv("i.name", b"foo.algo")]).unwrap();
        assert_eq!(fetch_name(&state).unwrap(), "foo.algo");
    }

    #[test]
    fn test_missing_name() {
        let state = decode_state_entries(&[uint_kv("i.ver", 1)]).unwrap();
        let err = fetch_name(&state).unwrap_err();
        assert!(matches!(err, NfdError::MissingField(ref k) if k == "i.name"));
    }

    #[test]
    fn test_classifies_by_suffix() {
        let linked = Address::new([2u8; 32]);
        let mut packed = linked.as_bytes().to_vec();
        packed.extend_from_slice(&[0u8; 64]);

        let state = decode_state_entries(&[
            bytes_kv("i.name", b"foo.algo"),
            bytes_kv("i.owner.a", owner().as_bytes()),
            bytes_kv("v.caAlgo.0.as", &packed),
            bytes_kv("u.twitter", b"@foo"),
            uint_kv("i.sellamt.a", 5),
        ])
        .unwrap();

        let properties = fetch_addresses(&state).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties["i.owner.a"], PropertyValue::Address(owner()));
        assert_eq!(properties["v.caAlgo.0.as"], PropertyValue::Addresses(vec![linked]));
    }

    #[test]
    fn test_empty_address_list_kept() {
        let state = decode_state_entries(&[bytes_kv("v.caAlgo.0.as", &[0u8; 96])]).unwrap();
        let properties = fetch_addresses(&state).unwrap();
        assert_eq!(properties["v.caAlgo.0.as"], PropertyValue::Addresses(vec![]));
    }

    #[test]
    fn test_short_single_address_is_malformed() {
        let state = decode_state_entries(&[bytes_kv("i.owner.a", &[1u8; 31])]).unwrap();
        assert!(matches!(
            fetch_addresses(&state).unwrap_err(),
            NfdError::MalformedData(_)
        ));
    }

    #[test]
    fn test_property_set_owner_and_vault() {
        let state = decode_state_entries(&[
            bytes_kv("i.name", b"foo.algo"),
            bytes_kv("i.owner.a", owner().as_bytes()),
        ])
        .unwrap();
        let set = PropertySet::from_state(42, &state).unwrap();
        assert_eq!(set.name, "foo.algo");
        assert_eq!(set.owner(), Some(&owner()));
        assert_eq!(set.vault, Address::for_application(42));
    }
}
