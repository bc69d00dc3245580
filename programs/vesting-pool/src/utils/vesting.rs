//! Vested-amount calculation. Pure: depends only on the schedule, the pool config and `now`.
//! - before reference_ts nothing is vested
//! - instant = floor(total * reference_bps / 10_000), available from reference_ts
//! - before cliff end only the instant part is vested
//! - afterwards each whole month past cliff end adds floor(total * monthly_bps / 10_000),
//!   the monthly part capped at total - instant
//!
//! The result is the cumulative amount vested to date, recomputed from immutable inputs,
//! so skipped months are picked up by the next claim.

use crate::error::VestingError;
use crate::state::{AccrualAnchor, PoolConfig, VestingSchedule};
use crate::utils::bps::mul_capped;
use crate::utils::time;

pub fn accrual_start(schedule: &VestingSchedule, config: &PoolConfig) -> Result<i64, VestingError> {
    let anchor = match config.accrual_anchor {
        AccrualAnchor::ScheduleStart => schedule.start_time,
        AccrualAnchor::ReferenceTime => config.reference_ts,
    };
    time::cliff_end(anchor, config.cliff_duration)
}

pub fn vested_amount(
    schedule: &VestingSchedule,
    config: &PoolConfig,
    now: i64,
) -> Result<u64, VestingError> {
    if now < config.reference_ts {
        return Ok(0);
    }
    let total = schedule.total_amount;
    let instant = config.reference_fraction()?.apply(total)?;

    let cliff_end = accrual_start(schedule, config)?;
    if now < cliff_end {
        return Ok(instant.min(total));
    }

    let months = time::months_elapsed(now, cliff_end, config.month_length)?;
    let tranche = config.monthly_fraction()?.apply(total)?;
    let remaining = total
        .checked_sub(instant)
        .ok_or(VestingError::MathOverflow)?;
    let monthly = mul_capped(months, tranche, remaining);

    Ok(instant.saturating_add(monthly).min(total))
}

/// Vested to date minus already released; 0 when `now` precedes a recorded claim.
pub fn claimable_amount(
    schedule: &VestingSchedule,
    config: &PoolConfig,
    now: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(schedule, config, now)?;
    Ok(vested.saturating_sub(schedule.released_amount))
}
