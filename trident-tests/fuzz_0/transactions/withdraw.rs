use super::{campaign_after, usable_after};
use crate::fuzz_accounts::FuzzAccounts;
use crate::instructions::*;
use trident_fuzz::fuzzing::*;

/// Customize transaction behavior by adding more instructions.
///
/// Docs: https://ackee.xyz/trident/docs/latest/trident-advanced/trident-transactions/multi-instruction-transactions/
#[derive(Debug, TridentTransaction, Default)]
pub struct WithdrawTransaction {
    pub instruction: WithdrawInstruction,
}

/// Methods for customizing transaction behavior:
/// - `pre_transaction`: Execute custom logic before transaction execution
/// - `transaction_invariant_check`: Validate transaction-specific invariants
/// - `transaction_error_handler`: Custom handling of transaction errors
/// - `post_transaction`: Execute custom logic after transaction execution
///
/// Docs: https://ackee.xyz/trident/docs/latest/trident-advanced/trident-transactions/transaction-methods/
impl TransactionHooks for WithdrawTransaction {
    fn transaction_invariant_check(&self) -> Result<(), FuzzingError> {
        let accounts = &self.instruction.accounts;
        let campaign = campaign_after(&accounts.campaign)?;

        if !campaign.claimed {
            return Err(FuzzingError::with_message("withdraw succeeded without claiming"));
        }
        if campaign.raised < campaign.goal {
            return Err(FuzzingError::with_message("withdraw succeeded below goal"));
        }
        if usable_after(&accounts.vault) != 0 {
            return Err(FuzzingError::with_message("withdraw left lamports in the vault"));
        }

        Ok(())
    }
}
