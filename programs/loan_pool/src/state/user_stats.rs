use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Per-user accounting, aggregated across every pool the user has
/// deposited into. PDA: ["user_stats", owner]; created lazily on the
/// user's first deposit.
///
/// Invariants held by the mutators below:
///   total_deposited >= total_withdrawn
///   available_for_withdraw <= total_deposited - total_withdrawn
#[account]
#[derive(Default)]
pub struct UserStats {
    pub owner: Pubkey,
    pub bump: u8,

    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub available_for_withdraw: u64,

    // Reserved
    pub _reserved: [u8; 32],
}

impl UserStats {
    pub const LEN: usize = 8 // discriminator
        + 32  // owner
        + 1   // bump
        + 8   // total_deposited
        + 8   // total_withdrawn
        + 8   // available_for_withdraw
        + 32; // reserved

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticError)?;
        self.available_for_withdraw = self
            .available_for_withdraw
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticError)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.available_for_withdraw = self
            .available_for_withdraw
            .checked_sub(amount)
            .ok_or(ErrorCode::ArithmeticError)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariants_hold(stats: &UserStats) -> bool {
        stats.total_deposited >= stats.total_withdrawn
            && stats.available_for_withdraw
                <= stats.total_deposited - stats.total_withdrawn
    }

    #[test]
    fn deposit_withdraw_sequence_keeps_invariants() {
        let mut stats = UserStats::default();

        stats.record_deposit(1_000).unwrap();
        assert!(invariants_hold(&stats));
        assert_eq!(stats.available_for_withdraw, 1_000);

        stats.record_withdrawal(400).unwrap();
        assert!(invariants_hold(&stats));
        assert_eq!(stats.total_withdrawn, 400);
        assert_eq!(stats.available_for_withdraw, 600);

        stats.record_deposit(50).unwrap();
        stats.record_withdrawal(650).unwrap();
        assert!(invariants_hold(&stats));
        assert_eq!(stats.total_deposited, 1_050);
        assert_eq!(stats.total_withdrawn, 1_050);
        assert_eq!(stats.available_for_withdraw, 0);
    }

    #[test]
    fn withdrawal_beyond_available_fails_without_mutation() {
        let mut stats = UserStats::default();
        stats.record_deposit(100).unwrap();

        assert!(stats.record_withdrawal(101).is_err());
        assert_eq!(stats.available_for_withdraw, 100);
        assert_eq!(stats.total_withdrawn, 0);
    }

    #[test]
    fn deposit_overflow_fails() {
        let mut stats = UserStats::default();
        stats.record_deposit(u64::MAX).unwrap();
        assert!(stats.record_deposit(1).is_err());
    }

    #[test]
    fn round_trip_restores_available() {
        let mut stats = UserStats::default();
        stats.record_deposit(1_000).unwrap();
        stats.record_withdrawal(1_000).unwrap();
        assert_eq!(stats.available_for_withdraw, 0);
        assert!(invariants_hold(&stats));
    }
}
