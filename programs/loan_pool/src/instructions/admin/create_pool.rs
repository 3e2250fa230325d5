use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolCreated;
use crate::state::Pool;

#[derive(Accounts)]
#[instruction(name: String, agreement_template_hash: [u8; 32])]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// One pool per (mint, agreement template); re-creation at the same
    /// address fails at the runtime level.
    #[account(
        init,
        payer = admin,
        space = Pool::LEN,
        seeds = [POOL_SEED, token_mint.key().as_ref(), &agreement_template_hash],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA that signs vault debits. Never allocated; only program
    /// logic can produce its signature.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<CreatePool>,
    name: String,
    agreement_template_hash: [u8; 32],
    interest_rate: u64,
    loan_term_months: u64,
    payment_frequency: u64,
    fee_percent: u8,
) -> Result<()> {
    require!(loan_term_months > 0, ErrorCode::InvalidLoanTerm);
    require!(payment_frequency > 0, ErrorCode::InvalidPaymentFrequency);
    require!(fee_percent <= MAX_FEE_PERCENT, ErrorCode::InvalidFeePercent);

    // Capture keys before mutable borrows
    let pool_key = ctx.accounts.pool.key();
    let admin_key = ctx.accounts.admin.key();
    let mint_key = ctx.accounts.token_mint.key();
    let vault_key = ctx.accounts.pool_vault.key();
    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    pool.admin = admin_key;
    pool.bump = ctx.bumps.pool;
    pool.mint = mint_key;
    pool.vault = vault_key;
    pool.vault_bump = ctx.bumps.vault_authority;
    pool.name = Pool::pack_name(&name);
    pool.agreement_template_hash = agreement_template_hash;
    pool.interest_rate = interest_rate;
    pool.loan_term_months = loan_term_months;
    pool.payment_frequency = payment_frequency;
    pool.fee_percent = fee_percent;
    pool.is_paused = false;
    pool.deposit_count = 0;
    pool.collected_fees = 0;
    pool.created_at = now;
    pool._reserved = [0u8; 64];

    emit!(PoolCreated {
        pool: pool_key,
        admin: admin_key,
        mint: mint_key,
        agreement_template_hash,
        timestamp: now,
    });

    Ok(())
}
