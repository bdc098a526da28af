use borsh::{BorshDeserialize, BorshSerialize};
use trident_fuzz::fuzzing::*;

/// File containing all custom types which can be used
/// in transactions and instructions or invariant checks.
///
/// You can define your own custom types here.

#[derive(Debug, BorshDeserialize, BorshSerialize, Clone, Default)]
pub struct Campaign {
    pub creator: TridentPubkey,

    pub name: String,

    pub goal: u64,

    pub deadline: i64,

    pub raised: u64,

    pub claimed: bool,

    pub created_at: i64,

    pub bump: u8,

    pub vault_bump: u8,
}

#[derive(Debug, BorshDeserialize, BorshSerialize, Clone, Default)]
pub struct Contribution {
    pub campaign: TridentPubkey,

    pub donor: TridentPubkey,

    pub amount: u64,

    pub bump: u8,
}
