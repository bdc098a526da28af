use super::*;
use crate::fuzz_accounts::FuzzAccounts;
use borsh::{BorshDeserialize, BorshSerialize};
use trident_fuzz::fuzzing::*;

#[derive(TridentInstruction, Default)]
#[program_id("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1")]
#[discriminator([183u8, 18u8, 70u8, 156u8, 148u8, 109u8, 161u8, 34u8])]
pub struct WithdrawInstruction {
    pub accounts: WithdrawInstructionAccounts,
    pub data: WithdrawInstructionData,
}

/// Instruction Accounts
#[derive(Debug, Clone, TridentAccounts, Default)]
#[instruction_data(WithdrawInstructionData)]
#[storage(FuzzAccounts)]
pub struct WithdrawInstructionAccounts {
    #[account(mut, signer)]
    pub creator: TridentAccount,

    #[account(mut)]
    pub campaign: TridentAccount,

    #[account(mut)]
    pub vault: TridentAccount,

    #[account(address = "11111111111111111111111111111111")]
    pub system_program: TridentAccount,
}

/// Instruction Data
#[derive(Debug, BorshDeserialize, BorshSerialize, Clone, Default)]
pub struct WithdrawInstructionData {}

/// Implementation of instruction setters for fuzzing
///
/// Provides methods to:
/// - Set instruction data during fuzzing
/// - Configure instruction accounts during fuzzing
/// - (Optional) Set remaining accounts during fuzzing
///
/// Docs: https://ackee.xyz/trident/docs/latest/start-fuzzing/writting-fuzz-test/
impl InstructionHooks for WithdrawInstruction {
    type IxAccounts = FuzzAccounts;

    fn set_accounts(&mut self, trident: &mut Trident, fuzz_accounts: &mut Self::IxAccounts) {
        // now and then a donor signs instead, which must fail with NotCreator
        let signer = if trident.gen_range(0..4u8) == 0 {
            let id = trident.gen_range(0..DONORS);
            donor_address(fuzz_accounts, trident, id)
        } else {
            creator_address(fuzz_accounts, trident)
        };
        let campaign = campaign_address(fuzz_accounts, trident);
        let vault = vault_address(fuzz_accounts, trident);

        self.accounts.creator.set_address(signer);
        self.accounts.campaign.set_address(campaign);
        self.accounts.vault.set_address(vault);
    }
}
