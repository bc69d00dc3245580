use anchor_lang::prelude::*;

use crate::constants::SCHEDULES_SEED;
use crate::error::VestingError;
use crate::state::{AllocationSummary, PoolConfig, ScheduleBook, VestingPool, VestingSchedule};

pub fn get_schedule(ctx: Context<ViewSchedule>, beneficiary: Pubkey) -> Result<Option<VestingSchedule>> {
    Ok(ctx.accounts.schedule_book.get(&beneficiary).copied())
}

pub fn get_pool_config(ctx: Context<ViewPool>) -> Result<PoolConfig> {
    Ok(ctx.accounts.pool.config)
}

pub fn get_allocation(ctx: Context<ViewPool>) -> Result<AllocationSummary> {
    Ok(ctx.accounts.pool.summary())
}

#[derive(Accounts)]
pub struct ViewSchedule<'info> {
    pub pool: Account<'info, VestingPool>,

    #[account(
        seeds = [SCHEDULES_SEED, pool.key().as_ref()],
        bump,
        has_one = pool @ VestingError::InvalidConfig,
    )]
    pub schedule_book: Box<Account<'info, ScheduleBook>>,
}

#[derive(Accounts)]
pub struct ViewPool<'info> {
    pub pool: Account<'info, VestingPool>,
}
