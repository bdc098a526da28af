#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constant;
pub mod errors;
pub mod event;
pub mod instructions;
pub mod pda;
pub mod state;
mod utils;


use instructions::*;

declare_id!("EtFxCa3EHCayoMJx7oiLeb6wAsb6AwUbuR6h4pArtrt1");

#[program]
pub mod crowdfund_escrow {
    use super::*;

    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        name: String,
        goal: u64,
        deadline: i64,
    ) -> Result<()> {
        ctx.accounts
            .handle_create_campaign(name, goal, deadline, &ctx.bumps)
    }

    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        ctx.accounts.handle_contribute(amount, &ctx.bumps)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        ctx.accounts.handle_withdraw()
    }

    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        ctx.accounts.handle_refund()
    }
}
