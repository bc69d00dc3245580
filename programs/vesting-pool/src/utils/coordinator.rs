//! Claim orchestration: resolve the caller's schedule, record the claim, then transfer.
//! The schedule is advanced before the transfer runs, so a nested claim observes the
//! updated `released_amount` and finds nothing claimable. A failed transfer rolls the
//! record back before the error is returned.

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{ClaimReceipt, ScheduleBook, VestingPool};

pub fn claim_with<F>(
    book: &mut ScheduleBook,
    pool: &mut VestingPool,
    caller: &Pubkey,
    now: i64,
    transfer: F,
) -> std::result::Result<ClaimReceipt, VestingError>
where
    F: FnOnce(u64) -> Result<()>,
{
    let receipt = book.record_claim(pool, caller, now)?;
    let released_total = match pool.released_total.checked_add(receipt.amount) {
        Some(total) => total,
        None => {
            book.rollback_claim(&receipt)?;
            return Err(VestingError::MathOverflow);
        }
    };
    let previous_released_total = pool.released_total;
    pool.released_total = released_total;

    if let Err(err) = transfer(receipt.amount) {
        msg!(
            "transfer of {} to {} failed: {}",
            receipt.amount,
            receipt.beneficiary,
            err
        );
        pool.released_total = previous_released_total;
        book.rollback_claim(&receipt)?;
        return Err(VestingError::TransferFailed);
    }

    Ok(receipt)
}

/// Read-only quote; an unknown caller gets 0 rather than an error.
pub fn claimable_for(
    book: &ScheduleBook,
    pool: &VestingPool,
    caller: &Pubkey,
    now: i64,
) -> std::result::Result<u64, VestingError> {
    book.claimable(pool, caller, now)
}
