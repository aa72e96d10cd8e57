//! NFD registry layout: lookup locations, state decoding and property extraction.

pub mod constants;
pub mod lsig;
pub mod properties;
pub mod state;

pub use properties::{PropertySet, PropertyValue};
pub use state::{RawState, StateKey, StateValue};
