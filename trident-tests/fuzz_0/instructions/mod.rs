pub mod contribute;
pub mod create_campaign;
pub mod refund;
pub mod withdraw;

pub use contribute::*;
pub use create_campaign::*;
pub use refund::*;
pub use withdraw::*;

use crate::fuzz_accounts::FuzzAccounts;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use trident_fuzz::fuzzing::*;

pub const PROGRAM_ID: Pubkey = pubkey!("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1");

/// One creator and one campaign per iteration; donors rotate over a small pool
/// so repeat deposits and refunds hit the same records.
pub const CAMPAIGN_NAME: &str = "fuzz-campaign";
pub const DONORS: u8 = 4;
pub const STARTING_LAMPORTS: u64 = 500 * LAMPORTS_PER_SOL;

pub fn campaign_address(fuzz_accounts: &mut FuzzAccounts, trident: &mut Trident) -> Pubkey {
    let creator = creator_address(fuzz_accounts, trident);
    let name_seed = solana_sdk::hash::hash(CAMPAIGN_NAME.as_bytes()).to_bytes();
    fuzz_accounts.campaign.get_or_create(
        0,
        trident,
        Some(PdaSeeds::new(&[b"campaign", creator.as_ref(), &name_seed], PROGRAM_ID)),
        None,
    )
}

pub fn vault_address(fuzz_accounts: &mut FuzzAccounts, trident: &mut Trident) -> Pubkey {
    let campaign = campaign_address(fuzz_accounts, trident);
    fuzz_accounts.vault.get_or_create(
        0,
        trident,
        Some(PdaSeeds::new(&[b"vault", campaign.as_ref()], PROGRAM_ID)),
        None,
    )
}

pub fn creator_address(fuzz_accounts: &mut FuzzAccounts, trident: &mut Trident) -> Pubkey {
    fuzz_accounts.creator.get_or_create(
        0,
        trident,
        None,
        Some(AccountSharedData::new(STARTING_LAMPORTS, 0, &solana_sdk::system_program::ID)),
    )
}

pub fn donor_address(fuzz_accounts: &mut FuzzAccounts, trident: &mut Trident, id: u8) -> Pubkey {
    fuzz_accounts.donor.get_or_create(
        id,
        trident,
        None,
        Some(AccountSharedData::new(STARTING_LAMPORTS, 0, &solana_sdk::system_program::ID)),
    )
}

pub fn contribution_address(
    fuzz_accounts: &mut FuzzAccounts,
    trident: &mut Trident,
    id: u8,
) -> Pubkey {
    let campaign = campaign_address(fuzz_accounts, trident);
    let donor = donor_address(fuzz_accounts, trident, id);
    fuzz_accounts.contribution.get_or_create(
        id,
        trident,
        Some(PdaSeeds::new(
            &[b"contribution", campaign.as_ref(), donor.as_ref()],
            PROGRAM_ID,
        )),
        None,
    )
}
