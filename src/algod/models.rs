//! Wire types returned by the algod v2 REST API.
//!
//! Only the fields the resolver reads are modelled; everything else in the
//! responses is ignored by serde.

use serde::{Deserialize, Serialize};

/// TEAL value type tag for byte strings. Anything else is a uint.
pub const TEAL_BYTES_TYPE: u64 = 1;
pub const TEAL_UINT_TYPE: u64 = 2;

/// A single global or local state entry; the key is base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TealKeyValue {
    pub key: String,
    pub value: TealValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TealValue {
    #[serde(rename = "type")]
    pub value_type: u64,
    /// Base64 encoded byte value, empty for uints.
    #[serde(default)]
    pub bytes: String,
    #[serde(default)]
    pub uint: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationLocalState {
    pub id: u64,
    #[serde(rename = "key-value", default)]
    pub key_value: Vec<TealKeyValue>,
}

/// Response of `GET /v2/accounts/{address}/applications/{application-id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountApplicationInfo {
    #[serde(rename = "app-local-state", default, skip_serializing_if = "Option::is_none")]
    pub app_local_state: Option<ApplicationLocalState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationParams {
    #[serde(default)]
    pub creator: String,
    #[serde(rename = "global-state", default)]
    pub global_state: Vec<TealKeyValue>,
}

/// Response of `GET /v2/applications/{application-id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub params: ApplicationParams,
}

/// Response of `GET /v2/applications/{application-id}/box`; both fields base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxValue {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub round: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxDescriptor {
    /// Base64 encoded box name.
    pub name: String,
}

/// Response of `GET /v2/applications/{application-id}/boxes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxesResponse {
    #[serde(default)]
    pub boxes: Vec<BoxDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHolding {
    #[serde(rename = "asset-id")]
    pub asset_id: u64,
    #[serde(default)]
    pub amount: u64,
    #[serde(rename = "is-frozen", default)]
    pub is_frozen: bool,
}

/// Response of `GET /v2/accounts/{address}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetParams {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub decimals: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "unit-name", default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

/// Response of `GET /v2/assets/{asset-id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub index: u64,
    pub params: AssetParams,
}
