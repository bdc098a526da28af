use super::*;
use crate::fuzz_accounts::FuzzAccounts;
use borsh::{BorshDeserialize, BorshSerialize};
use trident_fuzz::fuzzing::*;

#[derive(TridentInstruction, Default)]
#[program_id("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1")]
#[discriminator([82u8, 33u8, 68u8, 131u8, 32u8, 0u8, 205u8, 95u8])]
pub struct ContributeInstruction {
    pub accounts: ContributeInstructionAccounts,
    pub data: ContributeInstructionData,
}

/// Instruction Accounts
#[derive(Debug, Clone, TridentAccounts, Default)]
#[instruction_data(ContributeInstructionData)]
#[storage(FuzzAccounts)]
pub struct ContributeInstructionAccounts {
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
pub struct ContributeInstructionData {
    pub amount: u64,
}

/// Implementation of instruction setters for fuzzing
///
/// Provides methods to:
/// - Set instruction data during fuzzing
/// - Configure instruction accounts during fuzzing
/// - (Optional) Set remaining accounts during fuzzing
///
/// Docs: https://ackee.xyz/trident/docs/latest/start-fuzzing/writting-fuzz-test/
impl InstructionHooks for ContributeInstruction {
    type IxAccounts = FuzzAccounts;

    fn set_data(&mut self, trident: &mut Trident, _fuzz_accounts: &mut Self::IxAccounts) {
        // zero is kept in range so InvalidAmount gets exercised
        self.data.amount = trident.gen_range(0..8 * LAMPORTS_PER_SOL);
    }

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
