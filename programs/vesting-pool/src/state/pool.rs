use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::bps::BasisPoints;

/// Point from which monthly tranches are counted (before adding the cliff).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccrualAnchor {
    /// `schedule.start_time + cliff_duration`.
    ScheduleStart,
    /// `reference_ts + cliff_duration`.
    ReferenceTime,
}

/// Immutable pool configuration, written once by `initialize_pool`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Owning authority; the only key allowed to create schedules or deposit.
    pub owner: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Reference unlock timestamp (Unix seconds, UTC).
    pub reference_ts: i64,
    /// Cliff in seconds, may be zero.
    pub cliff_duration: i64,
    /// Tranche length in seconds.
    pub month_length: i64,
    /// Cap on the sum of all schedule entitlements.
    pub pool_cap: u64,
    /// Fraction unlocked at the reference time.
    pub reference_bps: u16,
    /// Fraction unlocked per whole month past the cliff.
    pub monthly_bps: u16,
    pub accrual_anchor: AccrualAnchor,
}

impl PoolConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        8 +  // reference_ts
        8 +  // cliff_duration
        8 +  // month_length
        8 +  // pool_cap
        2 +  // reference_bps
        2 +  // monthly_bps
        1;   // accrual_anchor

    pub fn validate(&self) -> std::result::Result<(), VestingError> {
        if self.owner == Pubkey::default() || self.mint == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if self.reference_ts <= 0 || self.cliff_duration < 0 {
            return Err(VestingError::InvalidTimestamp);
        }
        if self.pool_cap == 0 || self.month_length <= 0 {
            return Err(VestingError::InvalidConfig);
        }
        let reference = self.reference_fraction()?;
        let monthly = self.monthly_fraction()?;
        // A policy that can never reach 100% would strand tokens in the vault.
        if monthly.is_zero() && reference != BasisPoints::FULL {
            return Err(VestingError::InvalidConfig);
        }
        Ok(())
    }

    pub fn reference_fraction(&self) -> std::result::Result<BasisPoints, VestingError> {
        BasisPoints::new(self.reference_bps)
    }

    pub fn monthly_fraction(&self) -> std::result::Result<BasisPoints, VestingError> {
        BasisPoints::new(self.monthly_bps)
    }

    /// An entitlement whose tranche floors to zero never reaches its total.
    pub fn fully_vests(&self, total_amount: u64) -> std::result::Result<bool, VestingError> {
        let instant = self.reference_fraction()?.apply(total_amount)?;
        let tranche = self.monthly_fraction()?.apply(total_amount)?;
        Ok(instant >= total_amount || tranche > 0)
    }
}

/// Instruction input for `initialize_pool`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub owner: Pubkey,
    pub reference_ts: i64,
    pub cliff_days: u16,
    pub pool_cap: u64,
    pub reference_bps: u16,
    pub monthly_bps: u16,
    pub accrual_anchor: AccrualAnchor,
}

/// Pool PDA: immutable configuration plus the allocation ledger.
#[account]
pub struct VestingPool {
    pub config: PoolConfig,
    /// Sum of `total_amount` over every schedule in the pool; only grows.
    pub committed_total: u64,
    /// Sum of `released_amount` over every schedule in the pool.
    pub released_total: u64,
    pub schedule_count: u16,
    pub pool_id: u64,
    pub bump: u8,
}

impl VestingPool {
    pub const SIZE: usize =
        PoolConfig::SIZE +
        8 + // committed_total
        8 + // released_total
        2 + // schedule_count
        8 + // pool_id
        1;  // bump

    pub fn is_owner(&self, actor: &Pubkey) -> bool {
        self.config.owner == *actor
    }

    /// Committed total after reserving `amount`, without committing it.
    pub fn check_reserve(&self, amount: u64) -> std::result::Result<u64, VestingError> {
        let committed = self
            .committed_total
            .checked_add(amount)
            .ok_or(VestingError::CapExceeded)?;
        if committed > self.config.pool_cap {
            return Err(VestingError::CapExceeded);
        }
        Ok(committed)
    }

    /// Commit `amount` against the cap. State is untouched on failure.
    pub fn reserve(&mut self, amount: u64) -> std::result::Result<u64, VestingError> {
        let committed = self.check_reserve(amount)?;
        self.committed_total = committed;
        Ok(committed)
    }

    /// Vault balance after depositing `amount`. Tokens already released count
    /// against the cap, so the vault can never be refilled past what schedules can claim.
    pub fn check_deposit(
        &self,
        vault_balance: u64,
        amount: u64,
    ) -> std::result::Result<u64, VestingError> {
        let post = vault_balance
            .checked_add(amount)
            .ok_or(VestingError::OverDeposit)?;
        let lifetime = (post as u128) + (self.released_total as u128);
        if lifetime > self.config.pool_cap as u128 {
            return Err(VestingError::OverDeposit);
        }
        Ok(post)
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.config.pool_cap.saturating_sub(self.committed_total)
    }

    pub fn summary(&self) -> AllocationSummary {
        AllocationSummary {
            pool_cap: self.config.pool_cap,
            committed_total: self.committed_total,
            released_total: self.released_total,
            schedule_count: self.schedule_count,
        }
    }
}

/// Return type of `get_allocation`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationSummary {
    pub pool_cap: u64,
    pub committed_total: u64,
    pub released_total: u64,
    pub schedule_count: u16,
}
