use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::WithdrawalExecuted;
use crate::state::{DepositReceipt, Pool, UserStats};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    // No pause constraint: pausing gates new deposits only, existing
    // creditors can always exit.
    #[account(
        seeds = [POOL_SEED, pool.mint.as_ref(), &pool.agreement_template_hash],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [
            DEPOSIT_SEED,
            user.key().as_ref(),
            pool.key().as_ref(),
            &deposit.sequence.to_le_bytes(),
        ],
        bump = deposit.bump,
        constraint = deposit.owner == user.key() @ ErrorCode::Unauthorized,
        constraint = deposit.pool == pool.key() @ ErrorCode::InvalidAccountConfig,
    )]
    pub deposit: Box<Account<'info, DepositReceipt>>,

    #[account(
        mut,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump = user_stats.bump,
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

    /// CHECK: PDA that signs vault debits
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        amount <= ctx.accounts.deposit.remaining(),
        ErrorCode::InsufficientFunds
    );

    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    let deposit_key = ctx.accounts.deposit.key();

    let seeds = &[
        VAULT_AUTHORITY_SEED,
        pool_key.as_ref(),
        &[ctx.accounts.pool.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let deposit = &mut ctx.accounts.deposit;
    deposit.withdrawn_amount = deposit
        .withdrawn_amount
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticError)?;

    ctx.accounts.user_stats.record_withdrawal(amount)?;

    emit!(WithdrawalExecuted {
        user: user_key,
        pool: pool_key,
        deposit: deposit_key,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
