// Packed value encoding used by the NFD registry

use crate::address::{Address, ADDRESS_BYTES};
use crate::error::{NfdError, Result};

const UINT_BYTES: usize = 8;

/// Encode an unsigned integer as a little-endian base-128 varint
pub fn encode_uvarint(mut x: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    while x >= 0x80 {
        buf.push((x & 0x7f) as u8 | 0x80);
        x >>= 7;
    }
    buf.push(x as u8);
    buf
}

/// Decode a varint from the front of `buf`, returning the value and the number
/// of bytes consumed. `None` if the input is truncated or overflows 64 bits.
pub fn decode_uvarint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0u64;
    for (i, byte) in buf.iter().enumerate() {
        let shift = 7 * i as u32;
        if shift >= 64 || (shift == 63 && *byte > 1) {
            return None;
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

/// Big-endian u64 from an exactly 8-byte slice
pub fn read_u64_be(data: &[u8]) -> Result<u64> {
    let bytes: [u8; UINT_BYTES] = data.try_into().map_err(|_| {
        NfdError::MalformedData(format!("expected 8 bytes for an integer, got {}", data.len()))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

/// All non-zero 64-bit big-endian integers packed in `data`, in order.
///
/// The registry packs a fixed number of slots and writes zero into unused ones.
pub fn unpack_uints(data: &[u8]) -> Result<Vec<u64>> {
    if data.len() % UINT_BYTES != 0 {
        return Err(NfdError::MalformedData(format!(
            "data length {} is not a multiple of {}",
            data.len(),
            UINT_BYTES
        )));
    }
    let mut values = Vec::with_capacity(data.len() / UINT_BYTES);
    for chunk in data.chunks_exact(UINT_BYTES) {
        let value = read_u64_be(chunk)?;
        if value != 0 {
            values.push(value);
        }
    }
    Ok(values)
}

/// All non-zero 32-byte addresses packed in `data`, in order.
pub fn unpack_addresses(data: &[u8]) -> Result<Vec<Address>> {
    if data.len() % ADDRESS_BYTES != 0 {
        return Err(NfdError::MalformedData(format!(
            "data length {} is not a multiple of {}",
            data.len(),
            ADDRESS_BYTES
        )));
    }
    Ok(data
        .chunks_exact(ADDRESS_BYTES)
        .filter_map(Address::from_slice)
        .filter(|address| !address.is_zero())
        .collect())
}
