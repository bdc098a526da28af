use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::{
    constant::{seeds::VAULT, VAULT_DATA_LEN},
    errors::CrowdfundError,
};

/// Lamports leaving the vault on a terminal or refund operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub amount: u64,
    /// Portion of `amount` that was never recorded in `raised`, e.g. a direct
    /// transfer into the vault.
    pub swept_extra: u64,
}

/// Minimum balance that keeps the vault alive. Never paid out.
pub fn rent_floor() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(VAULT_DATA_LEN))
}

pub fn usable_balance(vault_lamports: u64, rent_floor: u64) -> u64 {
    vault_lamports.saturating_sub(rent_floor)
}

/// The creator takes everything above the rent floor.
pub fn withdraw_payout(raised: u64, usable: u64) -> Payout {
    Payout {
        amount: usable,
        swept_extra: usable.saturating_sub(raised),
    }
}

/// `raised_after` is the campaign total with this contribution already removed.
/// Zero means the caller is the last live contributor and empties the vault.
pub fn refund_payout(amount: u64, raised_after: u64, usable: u64) -> Result<Payout> {
    require!(usable >= amount, CrowdfundError::InsufficientCustody);

    if raised_after == 0 {
        Ok(Payout {
            amount: usable,
            swept_extra: usable - amount,
        })
    } else {
        Ok(Payout {
            amount,
            swept_extra: 0,
        })
    }
}

/// Tops the vault up to the rent floor. Returns the lamports moved.
pub fn provision_vault<'info>(
    system_program: AccountInfo<'info>,
    payer: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    rent_floor: u64,
) -> Result<u64> {
    let shortfall = rent_floor.saturating_sub(vault.lamports());
    if shortfall > 0 {
        deposit_to_vault(system_program, payer, vault, shortfall)?;
    }
    Ok(shortfall)
}

pub fn deposit_to_vault<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    transfer(
        CpiContext::new(system_program, Transfer { from, to: vault }),
        amount,
    )
}

pub fn release_from_vault<'info>(
    system_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    campaign: &Pubkey,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT, campaign.as_ref(), &[vault_bump]]];

    transfer(
        CpiContext::new_with_signer(system_program, Transfer { from: vault, to }, signer_seeds),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: u64 = 890_880;

    #[test]
    fn usable_balance_excludes_rent_floor() {
        assert_eq!(usable_balance(FLOOR, FLOOR), 0);
        assert_eq!(usable_balance(FLOOR + 600, FLOOR), 600);
        assert_eq!(usable_balance(FLOOR - 1, FLOOR), 0);
    }

    #[test]
    fn withdraw_takes_dust_along_with_proceeds() {
        assert_eq!(
            withdraw_payout(6_000, 6_000),
            Payout { amount: 6_000, swept_extra: 0 }
        );
        assert_eq!(
            withdraw_payout(6_000, 6_250),
            Payout { amount: 6_250, swept_extra: 250 }
        );
    }

    #[test]
    fn refund_pays_exact_amount_while_others_remain() {
        let payout = refund_payout(300, 700, 1_050).unwrap();
        assert_eq!(payout, Payout { amount: 300, swept_extra: 0 });
    }

    #[test]
    fn last_refund_sweeps_vault() {
        let payout = refund_payout(600, 0, 600).unwrap();
        assert_eq!(payout, Payout { amount: 600, swept_extra: 0 });

        // a stranger dropped 1_000_000 lamports into the vault
        let payout = refund_payout(600, 0, 1_000_600).unwrap();
        assert_eq!(payout, Payout { amount: 1_000_600, swept_extra: 1_000_000 });
    }

    #[test]
    fn refund_cannot_exceed_custody() {
        assert_eq!(
            refund_payout(600, 0, 599).unwrap_err(),
            Error::from(CrowdfundError::InsufficientCustody)
        );
    }
}
