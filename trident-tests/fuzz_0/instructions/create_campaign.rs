use super::*;
use crate::fuzz_accounts::FuzzAccounts;
use borsh::{BorshDeserialize, BorshSerialize};
use trident_fuzz::fuzzing::*;

#[derive(TridentInstruction, Default)]
#[program_id("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1")]
#[discriminator([111u8, 131u8, 187u8, 98u8, 160u8, 193u8, 114u8, 244u8])]
pub struct CreateCampaignInstruction {
    pub accounts: CreateCampaignInstructionAccounts,
    pub data: CreateCampaignInstructionData,
}

/// Instruction Accounts
#[derive(Debug, Clone, TridentAccounts, Default)]
#[instruction_data(CreateCampaignInstructionData)]
#[storage(FuzzAccounts)]
pub struct CreateCampaignInstructionAccounts {
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
pub struct CreateCampaignInstructionData {
    pub name: String,

    pub goal: u64,

    pub deadline: i64,
}

/// Implementation of instruction setters for fuzzing
///
/// Provides methods to:
/// - Set instruction data during fuzzing
/// - Configure instruction accounts during fuzzing
/// - (Optional) Set remaining accounts during fuzzing
///
/// Docs: https://ackee.xyz/trident/docs/latest/start-fuzzing/writting-fuzz-test/
impl InstructionHooks for CreateCampaignInstruction {
    type IxAccounts = FuzzAccounts;

    fn set_data(&mut self, trident: &mut Trident, _fuzz_accounts: &mut Self::IxAccounts) {
        let now = trident.get_sysvar::<Clock>().unix_timestamp;
        self.data.name = CAMPAIGN_NAME.to_string();
        self.data.goal = trident.gen_range(1..20 * LAMPORTS_PER_SOL);
        self.data.deadline = now + trident.gen_range(1..120);
    }

    fn set_accounts(&mut self, trident: &mut Trident, fuzz_accounts: &mut Self::IxAccounts) {
        let creator = creator_address(fuzz_accounts, trident);
        let campaign = campaign_address(fuzz_accounts, trident);
        let vault = vault_address(fuzz_accounts, trident);

        self.accounts.creator.set_address(creator);
        self.accounts.campaign.set_address(campaign);
        self.accounts.vault.set_address(vault);
    }
}
