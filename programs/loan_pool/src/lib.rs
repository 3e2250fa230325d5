#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod loan_pool {
    use super::*;

    // ── Admin ───────────────────────────────────────────────

    pub fn create_pool(
        ctx: Context<CreatePool>,
        name: String,
        agreement_template_hash: [u8; 32],
        interest_rate: u64,
        loan_term_months: u64,
        payment_frequency: u64,
        fee_percent: u8,
    ) -> Result<()> {
        instructions::admin::create_pool::handler(
            ctx,
            name,
            agreement_template_hash,
            interest_rate,
            loan_term_months,
            payment_frequency,
            fee_percent,
        )
    }

    pub fn pause_pool(ctx: Context<PausePool>, pause: bool) -> Result<()> {
        instructions::admin::pause_pool::handler(ctx, pause)
    }

    pub fn collect_fees(ctx: Context<CollectFees>, amount: u64) -> Result<()> {
        instructions::admin::collect_fees::handler(ctx, amount)
    }

    // ── Lending ─────────────────────────────────────────────

    pub fn deposit(
        ctx: Context<Deposit>,
        amount: u64,
        agreement_hash: [u8; 32],
    ) -> Result<()> {
        instructions::lending::deposit::handler(ctx, amount, agreement_hash)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::lending::withdraw::handler(ctx, amount)
    }
}
