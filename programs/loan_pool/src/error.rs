use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // General
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount,
    #[msg("Arithmetic overflow or underflow")]
    ArithmeticError,
    #[msg("Unauthorized: signer is not the required authority")]
    Unauthorized,
    #[msg("Invalid account configuration")]
    InvalidAccountConfig,

    // Pool creation
    #[msg("Invalid loan term: must be greater than zero")]
    InvalidLoanTerm,
    #[msg("Invalid payment frequency: must be greater than zero")]
    InvalidPaymentFrequency,
    #[msg("Invalid fee percent: must not exceed 100")]
    InvalidFeePercent,

    // Deposits and withdrawals
    #[msg("Pool is paused")]
    PoolPaused,
    #[msg("Agreement hash does not match the pool's agreement template")]
    InvalidAgreement,
    #[msg("Insufficient funds available")]
    InsufficientFunds,
}
