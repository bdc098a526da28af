use fuzz_accounts::*;
use trident_fuzz::fuzzing::*;
mod fuzz_accounts;
mod instructions;
mod transactions;
mod types;
pub use transactions::*;
use anyhow::Context;
use borsh::BorshDeserialize;
use instructions::{campaign_address, contribution_address, vault_address, DONORS};
use solana_sdk::rent::Rent;

#[derive(FuzzTestMethods)]
struct FuzzTest {
    /// for fuzzing
    trident: Trident,
    /// for storing fuzzing accounts
    fuzz_accounts: FuzzAccounts,
}

#[flow_executor]
impl FuzzTest {
    fn new() -> Self {
        Self {
            trident: Trident::default(),
            fuzz_accounts: FuzzAccounts::default(),
        }
    }

    #[init]
    fn start(&mut self) {
        let mut tx = CreateCampaignTransaction::build(&mut self.trident, &mut self.fuzz_accounts);
        self.trident.execute_transaction(&mut tx, Some("create_campaign"));
    }

    #[flow]
    fn contribute(&mut self) {
        let mut tx = ContributeTransaction::build(&mut self.trident, &mut self.fuzz_accounts);
        self.trident.execute_transaction(&mut tx, Some("contribute"));
    }

    #[flow]
    fn withdraw(&mut self) {
        let mut tx = WithdrawTransaction::build(&mut self.trident, &mut self.fuzz_accounts);
        self.trident.execute_transaction(&mut tx, Some("withdraw"));
    }

    #[flow]
    fn refund(&mut self) {
        let mut tx = RefundTransaction::build(&mut self.trident, &mut self.fuzz_accounts);
        self.trident.execute_transaction(&mut tx, Some("refund"));
    }

    #[flow]
    fn advance_clock(&mut self) {
        let seconds = self.trident.gen_range(1..60);
        self.trident.forward_in_time(seconds);
    }

    /// Lamports sent straight to the vault, outside `contribute`.
    #[flow]
    fn dust_vault(&mut self) {
        let vault = vault_address(&mut self.fuzz_accounts, &mut self.trident);
        let lamports = self.trident.gen_range(1..5_000_000);
        let balance = self.trident.get_account(&vault).lamports();
        self.trident.airdrop(&vault, balance + lamports);
    }

    #[end]
    fn end(&mut self) -> anyhow::Result<()> {
        let campaign_key = campaign_address(&mut self.fuzz_accounts, &mut self.trident);
        let vault_key = vault_address(&mut self.fuzz_accounts, &mut self.trident);

        // helper: read an Anchor account (skip 8-byte discriminator)
        let read = |trident: &Trident, pk: &Pubkey| -> anyhow::Result<Option<Vec<u8>>> {
            let account = trident.get_account(pk);
            if account.data().len() <= 8 {
                return Ok(None);
            }
            Ok(Some(account.data()[8..].to_vec()))
        };

        let Some(data) = read(&self.trident, &campaign_key)? else {
            return Ok(());
        };
        let campaign = types::Campaign::try_from_slice(&data).context("decode campaign")?;

        let mut live_total = 0u64;
        for id in 0..DONORS {
            let key = contribution_address(&mut self.fuzz_accounts, &mut self.trident, id);
            if let Some(data) = read(&self.trident, &key)? {
                let contribution =
                    types::Contribution::try_from_slice(&data).context("decode contribution")?;
                live_total += contribution.amount;
            }
        }

        // 1) raised mirrors the live contribution records
        anyhow::ensure!(
            campaign.raised == live_total,
            "raised {} != live contributions {}",
            campaign.raised,
            live_total
        );

        let rent_floor = Rent::default().minimum_balance(0);
        let vault_lamports = self.trident.get_account(&vault_key).lamports();
        let usable = vault_lamports.saturating_sub(rent_floor);

        // 2) the vault never drops below its rent floor
        anyhow::ensure!(vault_lamports >= rent_floor, "vault below rent floor");

        // 3) an unclaimed campaign can always pay back what it recorded
        if !campaign.claimed {
            anyhow::ensure!(usable >= campaign.raised, "vault cannot cover raised");
        }

        // 4) claiming implies the goal was met
        if campaign.claimed {
            anyhow::ensure!(campaign.raised >= campaign.goal, "claimed below goal");
        }

        Ok(())
    }
}

fn main() {
    FuzzTest::fuzz(1000, 100);
}
