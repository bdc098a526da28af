use anchor_lang::prelude::*;

#[event]
pub struct CampaignCreated {
    pub creator: Pubkey,
    pub campaign: Pubkey,
    pub vault: Pubkey,
    pub name: String,
    pub goal: u64,
    pub deadline: i64,
    pub rent_floor: u64,
}

#[event]
pub struct ContributionMade {
    pub donor: Pubkey,
    pub campaign: Pubkey,
    pub contribution: Pubkey,
    pub amount: u64,
    pub donor_total: u64,
    pub raised: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub creator: Pubkey,
    pub campaign: Pubkey,
    pub amount: u64,
    pub swept_extra: u64,
}

#[event]
pub struct ContributionRefunded {
    pub donor: Pubkey,
    pub campaign: Pubkey,
    pub contribution: Pubkey,
    pub amount: u64,
    /// Lamports paid out on top of `amount` when the last refund empties the vault.
    pub swept_extra: u64,
    pub raised: u64,
}
