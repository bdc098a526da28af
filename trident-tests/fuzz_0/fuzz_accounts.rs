use trident_fuzz::fuzzing::*;

/// FuzzAccounts contains all available accounts
///
/// You can create your own accounts by adding new fields to the struct.
///
/// Docs: https://ackee.xyz/trident/docs/latest/trident-api-macro/trident-types/fuzz-accounts/
#[derive(Default)]
pub struct FuzzAccounts {
    pub creator: AccountsStorage,

    pub campaign: AccountsStorage,

    pub vault: AccountsStorage,

    pub donor: AccountsStorage,

    pub contribution: AccountsStorage,

    pub system_program: AccountsStorage,
}
