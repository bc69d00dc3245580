use anchor_lang::prelude::*;

use crate::constants::{MAX_SCHEDULES, SCHEDULES_SEED};
use crate::error::VestingError;
use crate::state::{ScheduleBook, VestingPool};

pub fn create_vesting_schedule(
    ctx: Context<CreateVestingSchedule>,
    beneficiary: Pubkey,
    total_amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let pool = &mut ctx.accounts.pool;
    let book = &mut ctx.accounts.schedule_book;

    let schedule = book.create(pool, &owner, beneficiary, total_amount, now, MAX_SCHEDULES)?;

    msg!(
        "schedule {} created: {} committed, {} remaining",
        schedule.beneficiary,
        pool.committed_total,
        pool.remaining_capacity()
    );
    emit!(VestingScheduleCreated {
        beneficiary: schedule.beneficiary,
        total_amount: schedule.total_amount,
        start_time: schedule.start_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateVestingSchedule<'info> {
    #[account(mut)]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [SCHEDULES_SEED, pool.key().as_ref()],
        bump,
        has_one = pool @ VestingError::InvalidConfig,
    )]
    pub schedule_book: Box<Account<'info, ScheduleBook>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingScheduleCreated {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
}
