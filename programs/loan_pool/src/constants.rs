use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const POOL_SEED: &[u8] = b"pool";
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";
#[constant]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
#[constant]
pub const USER_STATS_SEED: &[u8] = b"user_stats";
#[constant]
pub const DEPOSIT_SEED: &[u8] = b"deposit";

// Basis points denominator (interest rates)
pub const BPS_DENOMINATOR: u64 = 10_000;

// Whole-percent denominator (deposit fees)
pub const PERCENT_DENOMINATOR: u64 = 100;

// Deposit fees may not exceed 100%
pub const MAX_FEE_PERCENT: u8 = 100;

pub const MONTHS_PER_YEAR: u64 = 12;

// Loan terms are quoted in 30-day months
pub const SECONDS_PER_MONTH: i64 = 30 * 86_400;

// Fixed width of the pool name slot
pub const POOL_NAME_LEN: usize = 32;
