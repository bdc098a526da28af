use anchor_lang::prelude::*;

use crate::errors::CrowdfundError;

/// One donor's running deposit into one campaign. Closed on refund.
#[account]
#[derive(InitSpace)]
pub struct Contribution {
    pub campaign: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Contribution {
    /// Stamps a freshly created record, or checks that a reused one belongs
    /// to this campaign and donor.
    pub fn bind(&mut self, campaign: Pubkey, donor: Pubkey, bump: u8) -> Result<()> {
        if self.donor == Pubkey::default() {
            self.campaign = campaign;
            self.donor = donor;
            self.amount = 0;
            self.bump = bump;
        }

        require_keys_eq!(self.campaign, campaign, CrowdfundError::IncorrectAccount);
        require_keys_eq!(self.donor, donor, CrowdfundError::IncorrectAccount);
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(CrowdfundError::NumericalOverflow)?;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Contribution {
        Contribution {
            campaign: Pubkey::default(),
            donor: Pubkey::default(),
            amount: 0,
            bump: 0,
        }
    }

    #[test]
    fn bind_initializes_fresh_record() {
        let (campaign, donor) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut c = empty();
        c.bind(campaign, donor, 253).unwrap();
        assert_eq!(c.campaign, campaign);
        assert_eq!(c.donor, donor);
        assert_eq!(c.amount, 0);
        assert_eq!(c.bump, 253);
    }

    #[test]
    fn bind_keeps_existing_amount() {
        let (campaign, donor) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut c = empty();
        c.bind(campaign, donor, 253).unwrap();
        c.credit(400).unwrap();

        c.bind(campaign, donor, 253).unwrap();
        assert_eq!(c.amount, 400);
        assert_eq!(c.credit(100).unwrap(), 500);
    }

    #[test]
    fn bind_rejects_foreign_record() {
        let (campaign, donor) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut c = empty();
        c.bind(campaign, donor, 253).unwrap();

        let err = c.bind(campaign, Pubkey::new_unique(), 253).unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::IncorrectAccount));
        let err = c.bind(Pubkey::new_unique(), donor, 253).unwrap_err();
        assert_eq!(err, Error::from(CrowdfundError::IncorrectAccount));
    }

    #[test]
    fn credit_overflow_is_rejected() {
        let mut c = empty();
        c.amount = u64::MAX;
        assert_eq!(
            c.credit(1).unwrap_err(),
            Error::from(CrowdfundError::NumericalOverflow)
        );
    }
}
