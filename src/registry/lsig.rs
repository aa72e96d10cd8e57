//! Deterministic storage locations for registry lookups.
//!
//! V1 entries live in the local state of a logic signature account whose program
//! embeds the registry id and the lookup key. V2 entries are registry boxes named
//! by the key itself.

use super::constants::*;
use crate::address::Address;
use crate::codec::encode_uvarint;

/// A byte range inside a program template that gets overwritten per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRegion {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
}

impl PatchRegion {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProgramTemplate {
    pub bytes: &'static [u8],
    pub registry_id: PatchRegion,
}

/// The registry's lookup logic signature.
pub const LOOKUP_TEMPLATE: ProgramTemplate = ProgramTemplate {
    bytes: &LOOKUP_LSIG_TEMPLATE,
    registry_id: PatchRegion {
        name: "registry_app_id",
        offset: REGISTRY_ID_OFFSET,
        len: REGISTRY_ID_LEN,
    },
};

impl ProgramTemplate {
    /// Template with the registry id patched in and `payload` appended as the
    /// immediate of the trailing `pushbytes`.
    pub fn instantiate(&self, registry_app_id: u64, payload: &[u8]) -> Vec<u8> {
        let mut program = Vec::with_capacity(self.bytes.len() + payload.len() + 2);
        program.extend_from_slice(self.bytes);
        program[self.registry_id.range()].copy_from_slice(&registry_app_id.to_be_bytes());
        program.extend(encode_uvarint(payload.len() as u64));
        program.extend_from_slice(payload);
        program
    }
}

/// Program bytes of the lookup logic signature for `prefix + lookup`
pub fn build_lookup_program(prefix: &str, lookup: &str, registry_app_id: u64) -> Vec<u8> {
    let payload = format!("{}{}", prefix, lookup);
    LOOKUP_TEMPLATE.instantiate(registry_app_id, payload.as_bytes())
}

/// V1 account holding the `i.appid` of `name`
pub fn name_lsig_address(name: &str, registry_app_id: u64) -> Address {
    Address::from_program(&build_lookup_program(NAME_PREFIX, name, registry_app_id))
}

/// V1 account holding the `i.apps{n}` slots of `address`; keyed by its text form
pub fn address_lsig_address(address: &Address, registry_app_id: u64) -> Address {
    Address::from_program(&build_lookup_program(
        ADDRESS_PREFIX,
        &address.to_string(),
        registry_app_id,
    ))
}

/// What a registry lookup is keyed by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Name(String),
    Address(Address),
}

impl LookupKey {
    /// V1 lookup account for this key
    pub fn lsig_address(&self, registry_app_id: u64) -> Address {
        match self {
            LookupKey::Name(name) => name_lsig_address(name, registry_app_id),
            LookupKey::Address(address) => address_lsig_address(address, registry_app_id),
        }
    }

    /// V2 registry box for this key
    pub fn box_key(&self) -> Vec<u8> {
        match self {
            LookupKey::Name(name) => name_box_key(name),
            LookupKey::Address(address) => address_box_key(address),
        }
    }
}

pub fn build_box_name(prefix: &str, lookup: &[u8]) -> Vec<u8> {
    let mut name = Vec::with_capacity(prefix.len() + lookup.len());
    name.extend_from_slice(prefix.as_bytes());
    name.extend_from_slice(lookup);
    name
}

/// V2 registry box for `name`
pub fn name_box_key(name: &str) -> Vec<u8> {
    build_box_name(NAME_PREFIX, name.as_bytes())
}

/// V2 registry box for `address`; keyed by the raw public key
pub fn address_box_key(address: &Address) -> Vec<u8> {
    build_box_name(ADDRESS_PREFIX, address.as_bytes())
}
