//! Algorand account addresses.
//!
//! An address is a 32-byte ed25519 public key. Its text form is the unpadded
//! RFC 4648 base32 encoding of the key followed by a 4-byte checksum (the tail of
//! the SHA-512/256 digest of the key), always 58 characters long.

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512_256};
use std::fmt;
use std::str::FromStr;

/// Number of raw bytes contained in an address.
pub const ADDRESS_BYTES: usize = 32;
/// Expected string length of an encoded address.
pub const ADDRESS_STRING_LENGTH: usize = 58;

const CHECKSUM_BYTES: usize = 4;

/// Domain separator hashed in front of logic signature program bytes.
const PROGRAM_DOMAIN: &[u8] = b"Program";
/// Domain separator hashed in front of a big-endian application id.
const APP_ID_DOMAIN: &[u8] = b"appID";

/// Errors that can occur when parsing an address string.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("address is not valid base32: {0}")]
    InvalidBase32(#[from] data_encoding::DecodeError),
    #[error("address checksum does not match")]
    InvalidChecksum,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl Address {
    /// The all-zero address, used by the registry to mark unused slots.
    pub const ZERO: Address = Address([0u8; ADDRESS_BYTES]);

    pub fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ADDRESS_BYTES] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Address of the logic signature account for the given program bytes.
    pub fn from_program(program: &[u8]) -> Self {
        Self(sha512_256(&[PROGRAM_DOMAIN, program]))
    }

    /// Address controlled by the application with the given id.
    pub fn for_application(app_id: u64) -> Self {
        Self(sha512_256(&[APP_ID_DOMAIN, &app_id.to_be_bytes()]))
    }
}

fn sha512_256(parts: &[&[u8]]) -> [u8; ADDRESS_BYTES] {
    let mut hasher = Sha512_256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; ADDRESS_BYTES];
    out.copy_from_slice(&digest);
    out
}

fn checksum(bytes: &[u8; ADDRESS_BYTES]) -> [u8; CHECKSUM_BYTES] {
    let digest = sha512_256(&[bytes.as_slice()]);
    let mut out = [0u8; CHECKSUM_BYTES];
    out.copy_from_slice(&digest[ADDRESS_BYTES - CHECKSUM_BYTES..]);
    out
}

/// Encode a 32-byte public key into its checksummed text form.
pub fn encode_address(bytes: &[u8; ADDRESS_BYTES]) -> String {
    let mut buf = Vec::with_capacity(ADDRESS_BYTES + CHECKSUM_BYTES);
    buf.extend_from_slice(bytes);
    buf.extend_from_slice(&checksum(bytes));
    BASE32_NOPAD.encode(&buf)
}

/// Decode a checksummed address string into the raw public key.
pub fn decode_address(address: &str) -> Result<[u8; ADDRESS_BYTES], AddressError> {
    if address.len() != ADDRESS_STRING_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_STRING_LENGTH,
            actual: address.len(),
        });
    }

    let decoded = BASE32_NOPAD.decode(address.as_bytes())?;
    let (key, sum) = decoded.split_at(ADDRESS_BYTES);
    let mut bytes = [0u8; ADDRESS_BYTES];
    bytes.copy_from_slice(key);

    if sum != checksum(&bytes).as_slice() {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(bytes)
}

/// Check whether the provided string is a valid address.
pub fn is_valid_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_address(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_address(s.trim()).map(Address)
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(value: [u8; ADDRESS_BYTES]) -> Self {
        Address(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        encode_address(&value.0)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
