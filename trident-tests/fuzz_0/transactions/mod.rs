pub mod contribute;
pub mod create_campaign;
pub mod refund;
pub mod withdraw;

pub use contribute::*;
pub use create_campaign::*;
pub use refund::*;
pub use withdraw::*;

use crate::types::Campaign;
use borsh::BorshDeserialize;
use solana_sdk::{account::ReadableAccount, rent::Rent};
use trident_fuzz::fuzzing::*;

/// Vault lamports above the rent floor once the transaction has landed.
pub(crate) fn usable_after(vault: &TridentAccount) -> u64 {
    let lamports = vault.get_snapshot_after().lamports();
    lamports.saturating_sub(Rent::default().minimum_balance(0))
}

pub(crate) fn campaign_after(campaign: &TridentAccount) -> Result<Campaign, FuzzingError> {
    let snapshot = campaign.get_snapshot_after();
    let data = snapshot.data();
    if data.len() <= 8 {
        return Err(FuzzingError::with_message("campaign missing after transaction"));
    }
    Campaign::try_from_slice(&data[8..])
        .map_err(|_| FuzzingError::with_message("decode campaign"))
}
