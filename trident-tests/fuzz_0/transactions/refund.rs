use super::{campaign_after, usable_after};
use crate::fuzz_accounts::FuzzAccounts;
use crate::instructions::*;
use solana_sdk::account::ReadableAccount;
use trident_fuzz::fuzzing::*;

/// Customize transaction behavior by adding more instructions.
///
/// Docs: https://ackee.xyz/trident/docs/latest/trident-advanced/trident-transactions/multi-instruction-transactions/
#[derive(Debug, TridentTransaction, Default)]
pub struct RefundTransaction {
    pub instruction: RefundInstruction,
}

/// Methods for customizing transaction behavior:
/// - `pre_transaction`: Execute custom logic before transaction execution
/// - `transaction_invariant_check`: Validate transaction-specific invariants
/// - `transaction_error_handler`: Custom handling of transaction errors
/// - `post_transaction`: Execute custom logic after transaction execution
///
/// Docs: https://ackee.xyz/trident/docs/latest/trident-advanced/trident-transactions/transaction-methods/
impl TransactionHooks for RefundTransaction {
    fn transaction_invariant_check(&self) -> Result<(), FuzzingError> {
        let accounts = &self.instruction.accounts;
        let campaign = campaign_after(&accounts.campaign)?;

        if !accounts.contribution.get_snapshot_after().data().is_empty() {
            return Err(FuzzingError::with_message("contribution still open after refund"));
        }

        // the last refund leaves nothing behind, dust included
        let usable = usable_after(&accounts.vault);
        if campaign.raised == 0 && usable != 0 {
            return Err(FuzzingError::with_message("last refund left lamports in the vault"));
        }
        if usable < campaign.raised {
            return Err(FuzzingError::with_message("vault cannot cover remaining contributions"));
        }

        Ok(())
    }
}
