use super::*;
use crate::fuzz_accounts::FuzzAccounts;
use borsh::{BorshDeserialize, BorshSerialize};
use trident_fuzz::fuzzing::*;

#[derive(TridentInstruction, Default)]
#[program_id("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1")]
#[discriminator([2u8, 96u8, 183u8, 251u8, 63u8, 208u8, 46u8, 46u8])]
pub struct RefundInstruction {
    pub accounts: RefundInstructionAccounts,
    pub data: RefundInstructionData,
}

/// Instruction Accounts
#[derive(Debug, Clone, TridentAccounts, Default)]
#[instruction_data(RefundInstructionData)]
#[storage(FuzzAccounts)]
pub struct RefundInstructionAccounts {
    #[account(mut, signer)]
    pub donor: TridentAccount,

    #[account(mut)]
    pub campaign: TridentAccount,

    #[account(mut)]
    pub vault: TridentAccount,

    #[account(mut)]
    pub contribution: TridentAccount,

    #[account(address = "11111111111111111111111111111111")]
    pub system_program: TridentAccount,
}

/// Instruction Data
#[derive(Debug, BorshDeserialize, BorshSerialize, Clone, Default)]
pub struct RefundInstructionData {}

/// Implementation of instruction setters for fuzzing
///
/// Provides methods to:
/// - Set instruction data during fuzzing
/// - Configure instruction accounts during fuzzing
/// - (Optional) Set remaining accounts during fuzzing
///
/// Docs: https://ackee.xyz/trident/docs/latest/start-fuzzing/writting-fuzz-test/
impl InstructionHooks for RefundInstruction {
    type IxAccounts = FuzzAccounts;

    fn set_accounts(&mut self, trident: &mut Trident, fuzz_accounts: &mut Self::IxAccounts) {
        let id = trident.gen_range(0..DONORS);
        let donor = donor_address(fuzz_accounts, trident, id);
        let campaign = campaign_address(fuzz_accounts, trident);
        let vault = vault_address(fuzz_accounts, trident);
        let contribution = contribution_address(fuzz_accounts, trident, id);

        self.accounts.donor.set_address(donor);
        self.accounts.campaign.set_address(campaign);
        self.accounts.vault.set_address(vault);
        self.accounts.contribution.set_address(contribution);
    }
}
