use anchor_lang::prelude::*;

use crate::{
    constant::{
        seeds::{CONTRIBUTION, VAULT},
        ANCHOR_DISCRIMINATOR,
    },
    event::ContributionMade,
    state::{Campaign, Contribution},
    utils::{deposit_to_vault, settle_contribution},
};

#[derive(Accounts)]
pub struct Contribute<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [VAULT, campaign.key().as_ref()],
        bump = campaign.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = donor,
        seeds = [CONTRIBUTION, campaign.key().as_ref(), donor.key().as_ref()],
        bump,
        space = ANCHOR_DISCRIMINATOR + Contribution::INIT_SPACE,
    )]
    pub contribution: Account<'info, Contribution>,

    pub system_program: Program<'info, System>,
}

impl<'info> Contribute<'info> {
    pub fn handle_contribute(&mut self, amount: u64, bumps: &ContributeBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let campaign_key = self.campaign.key();
        let donor_total = settle_contribution(
            &mut self.campaign,
            campaign_key,
            &mut self.contribution,
            self.donor.key(),
            bumps.contribution,
            amount,
            now,
        )?;

        deposit_to_vault(
            self.system_program.to_account_info(),
            self.donor.to_account_info(),
            self.vault.to_account_info(),
            amount,
        )?;

        msg!(
            "Contributed: {} lamports. Total Raised: {}",
            amount,
            self.campaign.raised
        );

        emit!(ContributionMade {
            donor: self.donor.key(),
            campaign: self.campaign.key(),
            contribution: self.contribution.key(),
            amount,
            donor_total,
            raised: self.campaign.raised,
        });

        Ok(())
    }
}
