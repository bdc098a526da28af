use anchor_lang::prelude::*;

use crate::{
    constant::seeds::{CONTRIBUTION, VAULT},
    event::ContributionRefunded,
    state::{Campaign, Contribution},
    utils::{release_from_vault, rent_floor, settle_refund},
};

#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    // Loaded before every other account: a donor who never contributed, or was
    // already refunded, fails with AccountNotInitialized whatever campaign and
    // vault they pass.
    #[account(
        mut,
        seeds = [CONTRIBUTION, campaign.key().as_ref(), donor.key().as_ref()],
        bump = contribution.bump,
        has_one = donor,
        has_one = campaign,
        close = donor,
    )]
    pub contribution: Account<'info, Contribution>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [VAULT, campaign.key().as_ref()],
        bump = campaign.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    pub fn handle_refund(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        msg!("Campaign phase: {:?}", self.campaign.phase(now));
        let amount = self.contribution.amount;
        let payout = settle_refund(
            &mut self.campaign,
            &self.contribution,
            self.vault.lamports(),
            rent_floor()?,
            now,
        )?;

        release_from_vault(
            self.system_program.to_account_info(),
            self.vault.to_account_info(),
            self.donor.to_account_info(),
            &self.campaign.key(),
            self.campaign.vault_bump,
            payout.amount,
        )?;

        msg!("Refunded: {} lamports", payout.amount);

        emit!(ContributionRefunded {
            donor: self.donor.key(),
            campaign: self.campaign.key(),
            contribution: self.contribution.key(),
            amount,
            swept_extra: payout.swept_extra,
            raised: self.campaign.raised,
        });

        Ok(())
    }
}
