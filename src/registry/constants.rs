/// NFD registry application on mainnet
pub const MAINNET_REGISTRY_APP_ID: u64 = 760937186;

/// NFD registry application on testnet
pub const TESTNET_REGISTRY_APP_ID: u64 = 84366825;

/// Key prefix for name → NFD application lookups
pub const NAME_PREFIX: &str = "name/";

/// Key prefix for address → NFD applications lookups
pub const ADDRESS_PREFIX: &str = "address/";

/// Suffix every NFD name carries
pub const NFD_SUFFIX: &str = ".algo";

/// Registry local-state key holding the NFD application id (V1)
pub const APP_ID_KEY: &str = "i.appid";

/// Registry local-state key prefix for packed application id slots (V1)
pub const APP_IDS_SLOT_PREFIX: &str = "i.apps";

/// Number of `i.apps{n}` slots a V1 reverse-lookup account can hold
pub const APP_IDS_SLOT_COUNT: usize = 16;

/// NFD application state key holding the name
pub const NAME_KEY: &str = "i.name";

/// NFD application state key holding the owner address
pub const OWNER_KEY: &str = "i.owner.a";

/// Suffix of keys holding a single packed address
pub const ADDRESS_SUFFIX: &str = ".a";

/// Suffix of keys holding a packed list of addresses
pub const ADDRESS_LIST_SUFFIX: &str = ".as";

/// A V2 name box holds the NFD asset id followed by the application id
pub const NAME_BOX_LENGTH: usize = 16;

/// Unit name of the ASA minted for every NFD
pub const NFD_ASSET_UNIT_NAME: &str = "NFD";

/// Lookup logic signature (TEAL v5).
///
/// Approves only opt-in/no-op app calls against the registry id pushed at the
/// start; the trailing `pushbytes` opcode takes the appended lookup key as its
/// immediate, so every key yields a distinct program and account.
pub const LOOKUP_LSIG_TEMPLATE: [u8; 46] = [
    0x05, 0x20, 0x01, 0x01, 0x80, 0x08, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x17,
    0x35, 0x00, 0x31, 0x18, 0x34, 0x00, 0x12, 0x31, 0x10, 0x81, 0x06, 0x12, 0x10, 0x31, 0x19,
    0x22, 0x12, 0x31, 0x19, 0x81, 0x00, 0x12, 0x11, 0x10, 0x40, 0x00, 0x01, 0x00, 0x22, 0x43,
    0x80,
];

/// Placeholder immediate of the template's first `pushbytes`, replaced by the
/// big-endian registry id.
pub const REGISTRY_ID_OFFSET: usize = 6;
pub const REGISTRY_ID_LEN: usize = 8;
