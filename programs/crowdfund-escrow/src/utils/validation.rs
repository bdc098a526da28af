use anchor_lang::prelude::*;

use crate::{constant::MAX_NAME_LEN, errors::CrowdfundError};

/// Checks creation parameters. The first failing check wins.
pub fn validate_campaign_params(name: &str, goal: u64, deadline: i64, now: i64) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, CrowdfundError::NameTooLong);
    require!(goal > 0, CrowdfundError::InvalidGoal);
    require!(deadline > now, CrowdfundError::DeadlineInPast);
    Ok(())
}
