use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::FeesCollected;
use crate::state::Pool;

#[derive(Accounts)]
pub struct CollectFees<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref(), &pool.agreement_template_hash],
        bump = pool.bump,
        constraint = pool.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        constraint = pool_vault.key() == pool.vault @ ErrorCode::InvalidAccountConfig,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// CHECK: PDA that signs vault debits
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// The admin-chosen token account receiving the swept fees
    #[account(
        mut,
        constraint = recipient_token_account.mint == pool.mint @ ErrorCode::InvalidAccountConfig,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CollectFees>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &mut ctx.accounts.pool;
    require!(pool.collected_fees >= amount, ErrorCode::InsufficientFunds);

    pool.collected_fees = pool
        .collected_fees
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticError)?;

    let pool_key = pool.key();
    let seeds = &[VAULT_AUTHORITY_SEED, pool_key.as_ref(), &[pool.vault_bump]];
    let signer_seeds = &[&seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(FeesCollected {
        pool: pool_key,
        amount,
        recipient: ctx.accounts.recipient_token_account.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
