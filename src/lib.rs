//! Forward and reverse lookups of NFD (`.algo`) names on Algorand.
//!
//! The NFD registry keeps two layouts side by side. Newer entries live in boxes
//! of the registry application, older ones in the local state of logic signature
//! accounts derived from the lookup key. [`NfdClient`] reads both, preferring
//! boxes.
//!
//! ```no_run
//! use nfdlookup::NfdClient;
//!
//! fn example() -> nfdlookup::Result<()> {
//!     let client = NfdClient::mainnet()?;
//!     if let Some(nfd) = client.lookup_name("nfdomains.algo")? {
//!         println!("{} is owned by {:?}", nfd.name, nfd.owner());
//!     }
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod algod;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod registry;

pub use address::{is_valid_address, Address, AddressError};
pub use algod::{AlgodClient, Ledger, LedgerError};
pub use client::NfdClient;
pub use config::{ClientConfig, Network};
pub use error::{NfdError, Result};
pub use registry::{PropertySet, PropertyValue};
