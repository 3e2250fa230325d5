use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::DepositReceived;
use crate::math::fee::split_deposit;
use crate::math::interest::{maturity_date, total_interest};
use crate::state::{DepositReceipt, Pool, UserStats};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref(), &pool.agreement_template_hash],
        bump = pool.bump,
        constraint = !pool.is_paused @ ErrorCode::PoolPaused,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Receipt slot derived from the deposit counter the caller observed.
    /// A stale counter loses the creation race here; the caller resubmits
    /// with a refreshed read.
    #[account(
        init,
        payer = user,
        space = DepositReceipt::LEN,
        seeds = [
            DEPOSIT_SEED,
            user.key().as_ref(),
            pool.key().as_ref(),
            &pool.deposit_count.to_le_bytes(),
        ],
        bump,
    )]
    pub deposit: Box<Account<'info, DepositReceipt>>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserStats::LEN,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump,
    )]
    pub user_stats: Box<Account<'info, UserStats>>,

    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
        constraint = user_token_account.mint == pool.mint @ ErrorCode::InvalidAccountConfig,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = pool_vault.key() == pool.vault @ ErrorCode::InvalidAccountConfig,
    )]
    pub pool_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64, agreement_hash: [u8; 32]) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        agreement_hash == ctx.accounts.pool.agreement_template_hash,
        ErrorCode::InvalidAgreement
    );

    // Capture keys before mutable borrows
    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    let deposit_key = ctx.accounts.deposit.key();
    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;

    let (net_amount, fee) = split_deposit(amount, pool.fee_percent)?;
    let interest = total_interest(net_amount, pool.interest_rate, pool.loan_term_months)?;
    let maturity = maturity_date(now, pool.loan_term_months)?;

    // The gross amount is custodied; the fee portion stays in the vault
    // until the admin sweeps it.
    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    let sequence = pool.deposit_count;

    let deposit = &mut ctx.accounts.deposit;
    deposit.owner = user_key;
    deposit.pool = pool_key;
    deposit.sequence = sequence;
    deposit.bump = ctx.bumps.deposit;
    deposit.amount = net_amount;
    deposit.withdrawn_amount = 0;
    deposit.fee_percent = pool.fee_percent;
    deposit.total_interest = interest;
    deposit.payment_frequency = pool.payment_frequency;
    deposit.loan_term_months = pool.loan_term_months;
    deposit.start_time = now;
    deposit.maturity_date = maturity;
    deposit.agreement_hash = agreement_hash;
    deposit._reserved = [0u8; 32];

    let user_stats = &mut ctx.accounts.user_stats;
    if user_stats.owner == Pubkey::default() {
        // First-time init
        user_stats.owner = user_key;
        user_stats.bump = ctx.bumps.user_stats;
    }
    user_stats.record_deposit(net_amount)?;

    pool.deposit_count = pool
        .deposit_count
        .checked_add(1)
        .ok_or(ErrorCode::ArithmeticError)?;
    pool.collected_fees = pool
        .collected_fees
        .checked_add(fee)
        .ok_or(ErrorCode::ArithmeticError)?;

    emit!(DepositReceived {
        user: user_key,
        pool: pool_key,
        deposit: deposit_key,
        sequence,
        amount: net_amount,
        fee,
        timestamp: now,
    });

    Ok(())
}
