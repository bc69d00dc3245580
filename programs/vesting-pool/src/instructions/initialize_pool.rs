use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_SCHEDULES, POOL_SEED, SCHEDULES_SEED, SECONDS_PER_MONTH, VAULT_SEED};
use crate::state::{PoolConfig, PoolParams, ScheduleBook, VestingPool};
use crate::utils::time;

pub fn initialize_pool(ctx: Context<InitializePool>, pool_id: u64, params: PoolParams) -> Result<()> {
    let config = PoolConfig {
        owner: params.owner,
        mint: ctx.accounts.mint.key(),
        reference_ts: params.reference_ts,
        cliff_duration: time::days_to_seconds(params.cliff_days),
        month_length: SECONDS_PER_MONTH,
        pool_cap: params.pool_cap,
        reference_bps: params.reference_bps,
        monthly_bps: params.monthly_bps,
        accrual_anchor: params.accrual_anchor,
    };
    config.validate()?;

    let pool = &mut ctx.accounts.pool;
    pool.config = config;
    pool.committed_total = 0;
    pool.released_total = 0;
    pool.schedule_count = 0;
    pool.pool_id = pool_id;
    pool.bump = ctx.bumps.pool;

    let book = &mut ctx.accounts.schedule_book;
    book.pool = pool.key();
    book.entries = Vec::with_capacity(MAX_SCHEDULES);

    emit!(PoolInitialized {
        pool: pool.key(),
        owner: config.owner,
        mint: config.mint,
        reference_ts: config.reference_ts,
        cliff_duration: config.cliff_duration,
        pool_cap: config.pool_cap,
        reference_bps: config.reference_bps,
        monthly_bps: config.monthly_bps,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VestingPool::SIZE,
        seeds = [POOL_SEED, mint.key().as_ref(), &pool_id.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(
        init,
        payer = payer,
        space = ScheduleBook::space(MAX_SCHEDULES),
        seeds = [SCHEDULES_SEED, pool.key().as_ref()],
        bump
    )]
    pub schedule_book: Box<Account<'info, ScheduleBook>>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = pool,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub reference_ts: i64,
    pub cliff_duration: i64,
    pub pool_cap: u64,
    pub reference_bps: u16,
    pub monthly_bps: u16,
}
