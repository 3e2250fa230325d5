use anchor_lang::prelude::*;

use crate::constants::POOL_NAME_LEN;

/// One lending pool per (token mint, agreement template) pair.
/// PDA: ["pool", mint, agreement_template_hash].
#[account]
pub struct Pool {
    pub admin: Pubkey,
    pub bump: u8,

    // Asset
    pub mint: Pubkey,
    pub vault: Pubkey, // Token account holding pooled deposits
    pub vault_bump: u8, // Bump of the vault authority PDA

    // Terms offered by this pool
    pub name: [u8; 32],
    pub agreement_template_hash: [u8; 32],
    pub interest_rate: u64, // basis points per year
    pub loan_term_months: u64,
    pub payment_frequency: u64, // months between interest installments
    pub fee_percent: u8,

    // Pool state
    pub is_paused: bool,
    pub deposit_count: u64,
    pub collected_fees: u64,
    pub created_at: i64,

    // Reserved
    pub _reserved: [u8; 64],
}

impl Pool {
    pub const LEN: usize = 8 // discriminator
        + 32  // admin
        + 1   // bump
        + 32  // mint
        + 32  // vault
        + 1   // vault_bump
        + 32  // name
        + 32  // agreement_template_hash
        + 8   // interest_rate
        + 8   // loan_term_months
        + 8   // payment_frequency
        + 1   // fee_percent
        + 1   // is_paused
        + 8   // deposit_count
        + 8   // collected_fees
        + 8   // created_at
        + 64; // reserved

    /// Pack a UTF-8 name into the fixed 32-byte slot, truncated and
    /// zero-padded.
    pub fn pack_name(name: &str) -> [u8; POOL_NAME_LEN] {
        let mut packed = [0u8; POOL_NAME_LEN];
        let bytes = name.as_bytes();
        let len = bytes.len().min(POOL_NAME_LEN);
        packed[..len].copy_from_slice(&bytes[..len]);
        packed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_name_pads_short_names() {
        let packed = Pool::pack_name("MyPool");
        assert_eq!(&packed[..6], b"MyPool");
        assert!(packed[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn pack_name_truncates_long_names() {
        let long = "x".repeat(40);
        assert_eq!(Pool::pack_name(&long), [b'x'; 32]);
    }

    #[test]
    fn pack_name_empty_is_all_zero() {
        assert_eq!(Pool::pack_name(""), [0u8; 32]);
    }
}
