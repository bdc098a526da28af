use anchor_lang::prelude::*;

use crate::{
    constant::{
        seeds::{CAMPAIGN, VAULT},
        ANCHOR_DISCRIMINATOR,
    },
    event::CampaignCreated,
    pda::campaign_name_seed,
    state::Campaign,
    utils::{open_campaign, provision_vault, rent_floor, CampaignParams},
};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Campaign::INIT_SPACE,
        seeds = [CAMPAIGN, creator.key().as_ref(), &campaign_name_seed(&name)],
        bump,
    )]
    pub campaign: Account<'info, Campaign>,

    /// Lamport-only custody PDA, funded to its rent floor here.
    #[account(
        mut,
        seeds = [VAULT, campaign.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateCampaign<'info> {
    pub fn handle_create_campaign(
        &mut self,
        name: String,
        goal: u64,
        deadline: i64,
        bumps: &CreateCampaignBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let campaign = open_campaign(
            CampaignParams {
                creator: self.creator.key(),
                name: &name,
                goal,
                deadline,
                bump: bumps.campaign,
                vault_bump: bumps.vault,
            },
            now,
        )?;

        let rent_floor = rent_floor()?;
        provision_vault(
            self.system_program.to_account_info(),
            self.creator.to_account_info(),
            self.vault.to_account_info(),
            rent_floor,
        )?;

        self.campaign.set_inner(campaign);

        msg!("Campaign created! Goal: {} lamports, Deadline: {}", goal, deadline);

        emit!(CampaignCreated {
            creator: self.creator.key(),
            campaign: self.campaign.key(),
            vault: self.vault.key(),
            name,
            goal,
            deadline,
            rent_floor,
        });

        Ok(())
    }
}
