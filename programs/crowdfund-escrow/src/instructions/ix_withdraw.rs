use anchor_lang::prelude::*;

use crate::{
    constant::seeds::VAULT,
    errors::CrowdfundError,
    event::FundsWithdrawn,
    state::Campaign,
    utils::{release_from_vault, rent_floor, settle_withdraw},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        has_one = creator @ CrowdfundError::NotCreator,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [VAULT, campaign.key().as_ref()],
        bump = campaign.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn handle_withdraw(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        msg!("Campaign phase: {:?}", self.campaign.phase(now));
        let payout = settle_withdraw(&mut self.campaign, self.vault.lamports(), rent_floor()?, now)?;

        release_from_vault(
            self.system_program.to_account_info(),
            self.vault.to_account_info(),
            self.creator.to_account_info(),
            &self.campaign.key(),
            self.campaign.vault_bump,
            payout.amount,
        )?;

        msg!("Withdrawn all funds: {} lamports", payout.amount);

        emit!(FundsWithdrawn {
            creator: self.creator.key(),
            campaign: self.campaign.key(),
            amount: payout.amount,
            swept_extra: payout.swept_extra,
        });

        Ok(())
    }
}
