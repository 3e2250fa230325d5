use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::ErrorCode;
use crate::events::PoolPauseSet;
use crate::state::Pool;

#[derive(Accounts)]
pub struct PausePool<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref(), &pool.agreement_template_hash],
        bump = pool.bump,
        constraint = pool.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub pool: Account<'info, Pool>,
}

/// Pausing gates new deposits only; existing deposits stay withdrawable.
pub fn handler(ctx: Context<PausePool>, pause: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.is_paused = pause;

    emit!(PoolPauseSet {
        pool: pool.key(),
        paused: pause,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
