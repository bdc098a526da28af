//! Ledger side of each instruction: guards, record updates and the payout,
//! given the vault balance. Handlers run these, then move the lamports.

use anchor_lang::prelude::*;

use crate::{
    state::{Campaign, Contribution},
    utils::{refund_payout, usable_balance, validate_campaign_params, withdraw_payout, Payout},
};

pub struct CampaignParams<'a> {
    pub creator: Pubkey,
    pub name: &'a str,
    pub goal: u64,
    pub deadline: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

pub fn open_campaign(params: CampaignParams, now: i64) -> Result<Campaign> {
    validate_campaign_params(params.name, params.goal, params.deadline, now)?;

    Ok(Campaign {
        creator: params.creator,
        name: params.name.to_string(),
        goal: params.goal,
        deadline: params.deadline,
        raised: 0,
        claimed: false,
        created_at: now,
        bump: params.bump,
        vault_bump: params.vault_bump,
    })
}

/// Returns the donor's running total. The caller moves `amount` into the vault.
pub fn settle_contribution(
    campaign: &mut Campaign,
    campaign_key: Pubkey,
    contribution: &mut Contribution,
    donor: Pubkey,
    contribution_bump: u8,
    amount: u64,
    now: i64,
) -> Result<u64> {
    campaign.ensure_accepts_contribution(amount, now)?;
    contribution.bind(campaign_key, donor, contribution_bump)?;
    let donor_total = contribution.credit(amount)?;
    campaign.record_contribution(amount)?;
    Ok(donor_total)
}

pub fn settle_withdraw(
    campaign: &mut Campaign,
    vault_lamports: u64,
    rent_floor: u64,
    now: i64,
) -> Result<Payout> {
    campaign.ensure_withdrawable(now)?;
    let payout = withdraw_payout(campaign.raised, usable_balance(vault_lamports, rent_floor));
    campaign.mark_claimed();
    Ok(payout)
}

/// The contribution record itself is closed by the caller.
pub fn settle_refund(
    campaign: &mut Campaign,
    contribution: &Contribution,
    vault_lamports: u64,
    rent_floor: u64,
    now: i64,
) -> Result<Payout> {
    campaign.ensure_refundable(now)?;
    let raised_after = campaign.release_contribution(contribution.amount)?;
    refund_payout(
        contribution.amount,
        raised_after,
        usable_balance(vault_lamports, rent_floor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CrowdfundError;

    const FLOOR: u64 = 890_880;
    const NOW: i64 = 1_700_000_000;

    fn campaign(goal: u64) -> Campaign {
        open_campaign(
            CampaignParams {
                creator: Pubkey::new_unique(),
                name: "roof",
                goal,
                deadline: NOW + 10,
                bump: 255,
                vault_bump: 254,
            },
            NOW,
        )
        .unwrap()
    }

    fn record(campaign: &mut Campaign, key: Pubkey, donor: Pubkey, amount: u64) -> Contribution {
        let mut c = Contribution {
            campaign: Pubkey::default(),
            donor: Pubkey::default(),
            amount: 0,
            bump: 0,
        };
        settle_contribution(campaign, key, &mut c, donor, 250, amount, NOW).unwrap();
        c
    }

    #[test]
    fn open_campaign_starts_empty() {
        let c = campaign(1_000);
        assert_eq!(c.raised, 0);
        assert!(!c.claimed);
        assert_eq!(c.created_at, NOW);
        assert_eq!(c.vault_bump, 254);

        let err = open_campaign(
            CampaignParams {
                creator: Pubkey::new_unique(),
                name: "roof",
                goal: 0,
                deadline: NOW + 10,
                bump: 255,
                vault_bump: 254,
            },
            NOW,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::InvalidGoal));
    }

    #[test]
    fn contribution_updates_record_and_total_together() {
        let key = Pubkey::new_unique();
        let donor = Pubkey::new_unique();
        let mut c = campaign(1_000);
        let mut rec = record(&mut c, key, donor, 300);

        let total = settle_contribution(&mut c, key, &mut rec, donor, 250, 200, NOW).unwrap();
        assert_eq!(total, 500);
        assert_eq!(rec.amount, 500);
        assert_eq!(c.raised, 500);
    }

    #[test]
    fn withdraw_marks_claimed_and_sweeps_vault() {
        let key = Pubkey::new_unique();
        let mut c = campaign(500);
        record(&mut c, key, Pubkey::new_unique(), 600);

        // 600 contributed plus 40 dust
        let payout = settle_withdraw(&mut c, FLOOR + 640, FLOOR, NOW + 10).unwrap();
        assert_eq!(payout, Payout { amount: 640, swept_extra: 40 });
        assert!(c.claimed);

        let err = settle_withdraw(&mut c, FLOOR, FLOOR, NOW + 11).unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::AlreadyClaimed));
    }

    #[test]
    fn failed_withdraw_leaves_campaign_unclaimed() {
        let mut c = campaign(500);
        let err = settle_withdraw(&mut c, FLOOR, FLOOR, NOW + 10).unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::GoalNotMet));
        assert!(!c.claimed);
    }

    #[test]
    fn last_refund_pays_out_dust() {
        let key = Pubkey::new_unique();
        let mut c = campaign(1_000);
        let alice = record(&mut c, key, Pubkey::new_unique(), 300);
        let bob = record(&mut c, key, Pubkey::new_unique(), 200);
        let dust = 77;

        let payout = settle_refund(&mut c, &alice, FLOOR + 500 + dust, FLOOR, NOW + 10).unwrap();
        assert_eq!(payout.amount, 300);
        assert_eq!(c.raised, 200);

        let payout = settle_refund(&mut c, &bob, FLOOR + 200 + dust, FLOOR, NOW + 10).unwrap();
        assert_eq!(payout, Payout { amount: 200 + dust, swept_extra: dust });
        assert_eq!(c.raised, 0);
    }

    #[test]
    fn refund_before_deadline_keeps_raised() {
        let key = Pubkey::new_unique();
        let mut c = campaign(1_000);
        let rec = record(&mut c, key, Pubkey::new_unique(), 300);

        let err = settle_refund(&mut c, &rec, FLOOR + 300, FLOOR, NOW + 9).unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::CampaignNotEnded));
        assert_eq!(c.raised, 300);
    }
}
