use anchor_lang::prelude::*;

// Pool lifecycle events
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub agreement_template_hash: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct PoolPauseSet {
    pub pool: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

// Ledger events
#[event]
pub struct DepositReceived {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub deposit: Pubkey,
    pub sequence: u64,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalExecuted {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub deposit: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesCollected {
    pub pool: Pubkey,
    pub amount: u64,
    pub recipient: Pubkey,
    pub timestamp: i64,
}
