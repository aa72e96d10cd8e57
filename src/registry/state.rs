//! Decoding of algod application state and boxes into a single key/value view.

use crate::algod::{BoxDescriptor, BoxValue, TealKeyValue, TEAL_BYTES_TYPE};
use crate::error::{NfdError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::BTreeMap;
use std::fmt;

/// State key: UTF-8 text when the raw key decodes as such, raw bytes otherwise
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKey {
    Text(String),
    Raw(Vec<u8>),
}

impl StateKey {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => StateKey::Text(text),
            Err(e) => StateKey::Raw(e.into_bytes()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StateKey::Text(text) => Some(text),
            StateKey::Raw(_) => None,
        }
    }
}

impl From<&str> for StateKey {
    fn from(value: &str) -> Self {
        StateKey::Text(value.to_string())
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Text(text) => f.write_str(text),
            StateKey::Raw(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Bytes(Vec<u8>),
    UInt(u64),
}

/// Key/value view of an application's state, rebuilt on every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawState {
    entries: BTreeMap<StateKey, StateValue>,
}

impl RawState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: StateKey, value: StateValue) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.entries.get(&StateKey::from(key))
    }

    /// Byte value under `key`; `None` when absent or an integer.
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        match self.get(key)? {
            StateValue::Bytes(bytes) => Some(bytes),
            StateValue::UInt(_) => None,
        }
    }

    /// Byte value under `key` decoded as UTF-8
    pub fn get_text(&self, key: &str) -> Option<&str> {
        std::str::from_utf8(self.get_bytes(key)?).ok()
    }

    pub fn get_uint(&self, key: &str) -> Option<u64> {
        match self.get(key)? {
            StateValue::UInt(value) => Some(*value),
            StateValue::Bytes(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &StateValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a box under its name. Boxes take precedence over global state.
    pub fn merge_box(&mut self, name: Vec<u8>, value: Vec<u8>) {
        self.entries
            .insert(StateKey::from_bytes(name), StateValue::Bytes(value));
    }
}

fn decode_base64(encoded: &str, what: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| NfdError::MalformedData(format!("{} is not valid base64: {}", what, e)))
}

/// Decode global or local state entries as returned by algod.
pub fn decode_state_entries(entries: &[TealKeyValue]) -> Result<RawState> {
    let mut state = RawState::new();
    for entry in entries {
        let key = StateKey::from_bytes(decode_base64(&entry.key, "state key")?);
        let value = if entry.value.value_type == TEAL_BYTES_TYPE {
            StateValue::Bytes(decode_base64(&entry.value.bytes, "state value")?)
        } else {
            StateValue::UInt(entry.value.uint)
        };
        state.insert(key, value);
    }
    Ok(state)
}

pub fn decode_box_value(value: &BoxValue) -> Result<Vec<u8>> {
    decode_base64(&value.value, "box value")
}

pub fn decode_box_name(descriptor: &BoxDescriptor) -> Result<Vec<u8>> {
    decode_base64(&descriptor.name, "box name")
}
