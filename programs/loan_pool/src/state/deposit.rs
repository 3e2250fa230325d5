use anchor_lang::prelude::*;

/// Receipt for a single deposit into a pool.
/// PDA: ["deposit", owner, pool, sequence_le_bytes], where `sequence` is
/// the pool's deposit counter observed by the caller at submission time.
#[account]
#[derive(Default)]
pub struct DepositReceipt {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub sequence: u64,
    pub bump: u8,

    // Principal, net of the deposit fee (token base units)
    pub amount: u64,
    pub withdrawn_amount: u64,

    // Terms snapshotted from the pool at deposit time
    pub fee_percent: u8,
    pub total_interest: u64,
    pub payment_frequency: u64,
    pub loan_term_months: u64,

    // Timestamps
    pub start_time: i64,
    pub maturity_date: i64,

    pub agreement_hash: [u8; 32],

    // Reserved
    pub _reserved: [u8; 32],
}

impl DepositReceipt {
    pub const LEN: usize = 8 // discriminator
        + 32  // owner
        + 32  // pool
        + 8   // sequence
        + 1   // bump
        + 8   // amount
        + 8   // withdrawn_amount
        + 1   // fee_percent
        + 8   // total_interest
        + 8   // payment_frequency
        + 8   // loan_term_months
        + 8   // start_time
        + 8   // maturity_date
        + 32  // agreement_hash
        + 32; // reserved

    /// Principal still held by the vault for this receipt.
    pub fn remaining(&self) -> u64 {
        self.amount.saturating_sub(self.withdrawn_amount)
    }

    /// A receipt is spent once its principal is fully withdrawn.
    pub fn is_spent(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_tracks_partial_withdrawals() {
        let mut receipt = DepositReceipt {
            amount: 1_000,
            ..Default::default()
        };
        assert_eq!(receipt.remaining(), 1_000);
        assert!(!receipt.is_spent());

        receipt.withdrawn_amount = 400;
        assert_eq!(receipt.remaining(), 600);

        receipt.withdrawn_amount = 1_000;
        assert_eq!(receipt.remaining(), 0);
        assert!(receipt.is_spent());
    }

    #[test]
    fn zero_amount_receipt_is_spent() {
        let receipt = DepositReceipt::default();
        assert!(receipt.is_spent());
    }
}
