//! Address derivation for every PDA the program owns. These are pure functions
//! of the identities involved; an address says nothing about whether the
//! account behind it exists.

use anchor_lang::{prelude::*, solana_program::hash::hash};

use crate::constant::seeds::{CAMPAIGN, CONTRIBUTION, VAULT};

/// Names are hashed so any length fits in a single 32-byte seed.
pub fn campaign_name_seed(name: &str) -> [u8; 32] {
    hash(name.as_bytes()).to_bytes()
}

pub fn campaign_address(creator: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CAMPAIGN, creator.as_ref(), &campaign_name_seed(name)],
        &crate::ID,
    )
}

pub fn vault_address(campaign: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, campaign.as_ref()], &crate::ID)
}

pub fn contribution_address(campaign: &Pubkey, donor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONTRIBUTION, campaign.as_ref(), donor.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_address_is_keyed_by_creator_and_name() {
        let creator = Pubkey::new_unique();
        let (a, _) = campaign_address(&creator, "roof");
        assert_eq!(a, campaign_address(&creator, "roof").0);
        assert_ne!(a, campaign_address(&creator, "roof-2").0);
        assert_ne!(a, campaign_address(&Pubkey::new_unique(), "roof").0);
    }

    #[test]
    fn long_names_still_derive() {
        let creator = Pubkey::new_unique();
        let name = "n".repeat(64);
        assert_eq!(
            campaign_address(&creator, &name),
            campaign_address(&creator, &name)
        );
    }

    #[test]
    fn vault_and_contribution_hang_off_campaign() {
        let (campaign, _) = campaign_address(&Pubkey::new_unique(), "roof");
        let (vault, _) = vault_address(&campaign);
        assert_ne!(vault, campaign);

        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let (a, _) = contribution_address(&campaign, &alice);
        assert_eq!(a, contribution_address(&campaign, &alice).0);
        assert_ne!(a, contribution_address(&campaign, &bob).0);
    }
}
