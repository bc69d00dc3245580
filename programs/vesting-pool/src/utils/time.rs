//! Fixed-length month arithmetic (no calendar; every month is `month_length` seconds).
//! - cliff_end = anchor + cliff
//! - months_elapsed = floor((now - from) / month_length), 0 while now < from

use crate::constants::SECONDS_PER_DAY;
use crate::error::VestingError;

pub fn days_to_seconds(days: u16) -> i64 {
    // u16::MAX days fits comfortably in i64 seconds.
    days as i64 * SECONDS_PER_DAY
}

pub fn cliff_end(anchor_ts: i64, cliff_duration: i64) -> Result<i64, VestingError> {
    if cliff_duration < 0 {
        return Err(VestingError::InvalidTimestamp);
    }
    anchor_ts
        .checked_add(cliff_duration)
        .ok_or(VestingError::MathOverflow)
}

/// Number of whole months between `from` and `now`, inclusive at boundaries.
pub fn months_elapsed(now_ts: i64, from_ts: i64, month_length: i64) -> Result<u64, VestingError> {
    if month_length <= 0 {
        return Err(VestingError::InvalidConfig);
    }
    if now_ts < from_ts {
        return Ok(0);
    }
    let elapsed = now_ts
        .checked_sub(from_ts)
        .ok_or(VestingError::MathOverflow)?;
    Ok((elapsed / month_length) as u64)
}
