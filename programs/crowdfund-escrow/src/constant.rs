pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Longest campaign name accepted, in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Data length of the vault PDA. It only ever holds lamports.
pub const VAULT_DATA_LEN: usize = 0;

pub mod seeds {
    pub const CAMPAIGN: &[u8] = b"campaign";
    pub const VAULT: &[u8] = b"vault";
    pub const CONTRIBUTION: &[u8] = b"contribution";
}
