use anchor_lang::prelude::*;

use crate::constants::SCHEDULES_SEED;
use crate::error::VestingError;
use crate::state::{ScheduleBook, VestingPool};
use crate::utils::{coordinator, vesting};

pub fn calculate_claimable_amount(ctx: Context<CalculateClaimable>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();
    let pool = &ctx.accounts.pool;
    let book = &ctx.accounts.schedule_book;

    let claimable = coordinator::claimable_for(book, pool, &beneficiary, now)?;
    let (vested, released) = match book.get(&beneficiary) {
        Some(schedule) => (
            vesting::vested_amount(schedule, &pool.config, now)?,
            schedule.released_amount,
        ),
        None => (0, 0),
    };

    emit!(ClaimableQuote {
        beneficiary,
        vested,
        released,
        claimable,
    });

    Ok(claimable)
}

#[derive(Accounts)]
pub struct CalculateClaimable<'info> {
    pub pool: Account<'info, VestingPool>,

    #[account(
        seeds = [SCHEDULES_SEED, pool.key().as_ref()],
        bump,
        has_one = pool @ VestingError::InvalidConfig,
    )]
    pub schedule_book: Box<Account<'info, ScheduleBook>>,

    pub beneficiary: Signer<'info>,
}

#[event]
pub struct ClaimableQuote {
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub released: u64,
    pub claimable: u64,
}
