use anchor_lang::prelude::*;

use crate::errors::CrowdfundError;

#[account]
#[derive(InitSpace, Debug)]
pub struct Campaign {
    pub creator: Pubkey,     // only key allowed to withdraw
    #[max_len(32)]
    pub name: String,
    pub goal: u64,           // lamports
    pub deadline: i64,       // unix timestamp
    pub raised: u64,         // sum of live contributions
    pub claimed: bool,
    pub created_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Where a campaign sits in its lifecycle at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    /// Before the deadline, accepting contributions.
    Open,
    /// Deadline passed with the goal met, waiting for the creator to withdraw.
    Funded,
    /// Deadline passed without the goal, donors may refund.
    Unfunded,
    /// Creator has withdrawn. Terminal.
    Claimed,
}

impl Campaign {
    pub fn goal_met(&self) -> bool {
        self.raised >= self.goal
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.deadline
    }

    pub fn phase(&self, now: i64) -> CampaignPhase {
        if self.claimed {
            CampaignPhase::Claimed
        } else if !self.has_ended(now) {
            CampaignPhase::Open
        } else if self.goal_met() {
            CampaignPhase::Funded
        } else {
            CampaignPhase::Unfunded
        }
    }

    pub fn ensure_accepts_contribution(&self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, CrowdfundError::InvalidAmount);
        require!(!self.has_ended(now), CrowdfundError::CampaignEnded);
        require!(!self.claimed, CrowdfundError::AlreadyClaimed);
        Ok(())
    }

    pub fn ensure_withdrawable(&self, now: i64) -> Result<()> {
        require!(self.has_ended(now), CrowdfundError::CampaignNotEnded);
        require!(!self.claimed, CrowdfundError::AlreadyClaimed);
        require!(self.goal_met(), CrowdfundError::GoalNotMet);
        Ok(())
    }

    pub fn ensure_refundable(&self, now: i64) -> Result<()> {
        require!(self.has_ended(now), CrowdfundError::CampaignNotEnded);
        require!(!self.goal_met(), CrowdfundError::GoalMetCannotRefund);
        Ok(())
    }

    pub fn record_contribution(&mut self, amount: u64) -> Result<()> {
        self.raised = self
            .raised
            .checked_add(amount)
            .ok_or(CrowdfundError::NumericalOverflow)?;
        Ok(())
    }

    /// Removes a refunded contribution from `raised` and returns what is left.
    pub fn release_contribution(&mut self, amount: u64) -> Result<u64> {
        self.raised = self
            .raised
            .checked_sub(amount)
            .ok_or(CrowdfundError::NumericalOverflow)?;
        Ok(self.raised)
    }

    pub fn mark_claimed(&mut self) {
        self.claimed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: i64 = 1_700_000_000;

    fn campaign(goal: u64, raised: u64) -> Campaign {
        Campaign {
            creator: Pubkey::new_unique(),
            name: "solar-roof".to_string(),
            goal,
            deadline: DEADLINE,
            raised,
            claimed: false,
            created_at: DEADLINE - 100,
            bump: 255,
            vault_bump: 254,
        }
    }

    fn assert_fails(res: Result<()>, expected: CrowdfundError) {
        assert_eq!(res.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn phase_follows_deadline_and_goal() {
        let mut c = campaign(1_000, 999);
        assert_eq!(c.phase(DEADLINE - 1), CampaignPhase::Open);
        assert_eq!(c.phase(DEADLINE), CampaignPhase::Unfunded);

        c.raised = 1_000;
        assert_eq!(c.phase(DEADLINE), CampaignPhase::Funded);

        c.mark_claimed();
        assert_eq!(c.phase(DEADLINE + 10), CampaignPhase::Claimed);
    }

    #[test]
    fn contribution_rejects_zero_before_timing() {
        let c = campaign(1_000, 0);
        // zero amount wins even after the deadline
        assert_fails(
            c.ensure_accepts_contribution(0, DEADLINE + 5),
            CrowdfundError::InvalidAmount,
        );
        assert_fails(
            c.ensure_accepts_contribution(10, DEADLINE),
            CrowdfundError::CampaignEnded,
        );
        assert!(c.ensure_accepts_contribution(10, DEADLINE - 1).is_ok());
    }

    #[test]
    fn contribution_rejected_once_claimed() {
        let mut c = campaign(1_000, 1_000);
        c.claimed = true;
        assert_fails(
            c.ensure_accepts_contribution(10, DEADLINE - 1),
            CrowdfundError::AlreadyClaimed,
        );
    }

    #[test]
    fn withdraw_checks_run_in_order() {
        let mut c = campaign(1_000, 0);
        c.claimed = true;
        assert_fails(c.ensure_withdrawable(DEADLINE - 1), CrowdfundError::CampaignNotEnded);
        assert_fails(c.ensure_withdrawable(DEADLINE), CrowdfundError::AlreadyClaimed);

        c.claimed = false;
        assert_fails(c.ensure_withdrawable(DEADLINE), CrowdfundError::GoalNotMet);

        c.raised = 1_000;
        assert!(c.ensure_withdrawable(DEADLINE).is_ok());
    }

    #[test]
    fn refund_checks_run_in_order() {
        let c = campaign(1_000, 2_000);
        assert_fails(c.ensure_refundable(DEADLINE - 1), CrowdfundError::CampaignNotEnded);
        assert_fails(c.ensure_refundable(DEADLINE), CrowdfundError::GoalMetCannotRefund);

        let c = campaign(1_000, 999);
        assert!(c.ensure_refundable(DEADLINE).is_ok());
    }

    #[test]
    fn raised_arithmetic_is_checked() {
        let mut c = campaign(1_000, u64::MAX - 1);
        assert_fails(c.record_contribution(2), CrowdfundError::NumericalOverflow);
        assert_eq!(c.raised, u64::MAX - 1);

        let mut c = campaign(1_000, 600);
        assert_eq!(c.release_contribution(200).unwrap(), 400);
        assert_eq!(
            c.release_contribution(401).unwrap_err(),
            Error::from(CrowdfundError::NumericalOverflow)
        );
    }
}
