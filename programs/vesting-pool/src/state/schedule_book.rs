use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingPool;
use crate::utils::vesting;

/// One beneficiary's schedule inside the schedule book.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Entitlement, fixed at creation.
    pub total_amount: u64,
    /// Cumulative amount withdrawn; never exceeds `total_amount`.
    pub released_amount: u64,
    /// Creation timestamp.
    pub start_time: i64,
    /// Timestamp of the last successful claim, 0 if never claimed.
    pub last_released_time: i64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // total_amount
        8 +  // released_amount
        8 +  // start_time
        8;   // last_released_time

    pub fn is_fully_released(&self) -> bool {
        self.released_amount == self.total_amount
    }
}

/// What a claim changed, so it can be undone if the transfer fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub claimed_at: i64,
    pub previous_released_time: i64,
}

/// PDA holding every schedule of one pool (<= MAX_SCHEDULES entries).
/// Insertion order is creation order; entries are never removed.
#[account]
pub struct ScheduleBook {
    pub pool: Pubkey,
    pub entries: Vec<VestingSchedule>,
}

impl ScheduleBook {
    /// Space for discriminator + pool key + vec header + `max` entries.
    pub const fn space(max: usize) -> usize {
        8 + 32 + 4 + max * VestingSchedule::SIZE
    }

    pub fn get(&self, beneficiary: &Pubkey) -> Option<&VestingSchedule> {
        self.entries.iter().find(|e| e.beneficiary == *beneficiary)
    }

    fn get_mut(&mut self, beneficiary: &Pubkey) -> Option<&mut VestingSchedule> {
        self.entries.iter_mut().find(|e| e.beneficiary == *beneficiary)
    }

    /// Owner-only creation of a beneficiary's single schedule.
    pub fn create(
        &mut self,
        pool: &mut VestingPool,
        caller: &Pubkey,
        beneficiary: Pubkey,
        total_amount: u64,
        now: i64,
        capacity: usize,
    ) -> std::result::Result<VestingSchedule, VestingError> {
        if !pool.is_owner(caller) {
            return Err(VestingError::Unauthorized);
        }
        if beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if total_amount == 0 {
            return Err(VestingError::InvalidAllocation);
        }
        if self.get(&beneficiary).is_some() {
            return Err(VestingError::DuplicateSchedule);
        }
        if self.entries.len() >= capacity {
            return Err(VestingError::ScheduleBookFull);
        }
        let schedule_count = pool
            .schedule_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;

        pool.check_reserve(total_amount)?;
        if !pool.config.fully_vests(total_amount)? {
            return Err(VestingError::InvalidAllocation);
        }

        pool.reserve(total_amount)?;
        pool.schedule_count = schedule_count;

        let schedule = VestingSchedule {
            beneficiary,
            total_amount,
            released_amount: 0,
            start_time: now,
            last_released_time: 0,
        };
        self.entries.push(schedule);
        Ok(schedule)
    }

    /// Claimable amount for `beneficiary` at `now`; 0 for an unknown key.
    pub fn claimable(
        &self,
        pool: &VestingPool,
        beneficiary: &Pubkey,
        now: i64,
    ) -> std::result::Result<u64, VestingError> {
        match self.get(beneficiary) {
            Some(schedule) => vesting::claimable_amount(schedule, &pool.config, now),
            None => Ok(0),
        }
    }

    /// Advance the schedule by everything claimable at `now`.
    pub fn record_claim(
        &mut self,
        pool: &VestingPool,
        beneficiary: &Pubkey,
        now: i64,
    ) -> std::result::Result<ClaimReceipt, VestingError> {
        let config = pool.config;
        let schedule = self
            .get_mut(beneficiary)
            .ok_or(VestingError::NoSchedule)?;

        let amount = vesting::claimable_amount(schedule, &config, now)?;
        if amount == 0 {
            return Err(VestingError::NothingClaimable);
        }
        let released_total = schedule
            .released_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if released_total > schedule.total_amount {
            return Err(VestingError::MathOverflow);
        }

        let receipt = ClaimReceipt {
            beneficiary: *beneficiary,
            amount,
            released_total,
            claimed_at: now,
            previous_released_time: schedule.last_released_time,
        };
        schedule.released_amount = released_total;
        schedule.last_released_time = now;
        Ok(receipt)
    }

    /// Undo a `record_claim` whose transfer did not go through.
    pub fn rollback_claim(
        &mut self,
        receipt: &ClaimReceipt,
    ) -> std::result::Result<(), VestingError> {
        let schedule = self
            .get_mut(&receipt.beneficiary)
            .ok_or(VestingError::NoSchedule)?;
        schedule.released_amount = schedule
            .released_amount
            .checked_sub(receipt.amount)
            .ok_or(VestingError::MathOverflow)?;
        schedule.last_released_time = receipt.previous_released_time;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SCHEDULES;
    use crate::state::pool::tests::pool_with;

    const REFERENCE: i64 = 1_767_225_600;

    fn book() -> ScheduleBook {
        ScheduleBook {
            pool: Pubkey::new_unique(),
            entries: Vec::new(),
        }
    }

    #[test]
    fn create_records_fresh_schedule() {
        let owner = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();

        let s = book
            .create(&mut pool, &owner, beneficiary, 1_000, REFERENCE - 10, MAX_SCHEDULES)
            .unwrap();
        assert_eq!(s.beneficiary, beneficiary);
        assert_eq!(s.total_amount, 1_000);
        assert_eq!(s.released_amount, 0);
        assert_eq!(s.start_time, REFERENCE - 10);
        assert_eq!(s.last_released_time, 0);
        assert_eq!(book.get(&beneficiary), Some(&s));
        assert_eq!(pool.committed_total, 1_000);
        assert_eq!(pool.schedule_count, 1);
    }

    #[test]
    fn create_requires_owner() {
        let owner = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();
        let intruder = Pubkey::new_unique();

        let r = book.create(&mut pool, &intruder, Pubkey::new_unique(), 1_000, REFERENCE, MAX_SCHEDULES);
        assert!(matches!(r, Err(VestingError::Unauthorized)));
        assert!(book.entries.is_empty());
        assert_eq!(pool.committed_total, 0);
    }

    #[test]
    fn create_twice_is_duplicate_whatever_the_amount() {
        let owner = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();

        book.create(&mut pool, &owner, beneficiary, 1_000, REFERENCE, MAX_SCHEDULES)
            .unwrap();
        for amount in [1_000, 1, 9_000] {
            let r = book.create(&mut pool, &owner, beneficiary, amount, REFERENCE, MAX_SCHEDULES);
            assert!(matches!(r, Err(VestingError::DuplicateSchedule)));
        }
        assert_eq!(pool.committed_total, 1_000);
        assert_eq!(book.entries.len(), 1);
    }

    #[test]
    fn create_rejects_zero_amount_and_default_key() {
        let owner = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();

        let r = book.create(&mut pool, &owner, Pubkey::new_unique(), 0, REFERENCE, MAX_SCHEDULES);
        assert!(matches!(r, Err(VestingError::InvalidAllocation)));
        let r = book.create(&mut pool, &owner, Pubkey::default(), 10, REFERENCE, MAX_SCHEDULES);
        assert!(matches!(r, Err(VestingError::InvalidPubkey)));
    }

    #[test]
    fn create_rejects_amount_whose_tranche_floors_to_zero() {
        let owner = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();
        let small = Pubkey::new_unique();

        let r = book.create(&mut pool, &owner, small, 10, REFERENCE, MAX_SCHEDULES);
        assert!(matches!(r, Err(VestingError::InvalidAllocation)));
        assert!(book.get(&small).is_none());
        assert_eq!(pool.committed_total, 0);
        assert_eq!(pool.schedule_count, 0);

        book.create(&mut pool, &owner, small, 15, REFERENCE, MAX_SCHEDULES)
            .unwrap();
        assert_eq!(pool.committed_total, 15);
    }

    #[test]
    fn cap_exhausted_exactly_then_rejects() {
        let owner = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 6_000, 0, 1_000);
        let mut book = book();

        for amount in [1_000, 2_000, 3_000] {
            book.create(&mut pool, &owner, Pubkey::new_unique(), amount, REFERENCE, MAX_SCHEDULES)
                .unwrap();
        }
        assert_eq!(pool.committed_total, pool.config.pool_cap);

        let late = Pubkey::new_unique();
        let r = book.create(&mut pool, &owner, late, 1, REFERENCE, MAX_SCHEDULES);
        assert!(matches!(r, Err(VestingError::CapExceeded)));
        assert!(book.get(&late).is_none());
        assert_eq!(pool.committed_total, 6_000);
        assert_eq!(pool.schedule_count, 3);
    }

    #[test]
    fn full_book_rejects_before_touching_ledger() {
        let owner = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 0, 1_000);
        let mut book = book();

        book.create(&mut pool, &owner, Pubkey::new_unique(), 10, REFERENCE, 2)
            .unwrap();
        book.create(&mut pool, &owner, Pubkey::new_unique(), 10, REFERENCE, 2)
            .unwrap();
        let r = book.create(&mut pool, &owner, Pubkey::new_unique(), 10, REFERENCE, 2);
        assert!(matches!(r, Err(VestingError::ScheduleBookFull)));
        assert_eq!(pool.committed_total, 20);
    }

    #[test]
    fn record_then_rollback_restores_schedule() {
        let owner = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();
        let mut pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();
        book.create(&mut pool, &owner, beneficiary, 1_000, REFERENCE, MAX_SCHEDULES)
            .unwrap();
        let before = *book.get(&beneficiary).unwrap();

        let receipt = book.record_claim(&pool, &beneficiary, REFERENCE).unwrap();
        assert_eq!(receipt.amount, 160);
        assert_eq!(book.get(&beneficiary).unwrap().released_amount, 160);
        assert_eq!(book.get(&beneficiary).unwrap().last_released_time, REFERENCE);

        book.rollback_claim(&receipt).unwrap();
        assert_eq!(*book.get(&beneficiary).unwrap(), before);
    }

    #[test]
    fn unknown_beneficiary_quotes_zero_but_cannot_claim() {
        let owner = Pubkey::new_unique();
        let pool = pool_with(owner, REFERENCE, 0, 10_000, 1_600, 700);
        let mut book = book();
        let stranger = Pubkey::new_unique();

        assert_eq!(book.claimable(&pool, &stranger, REFERENCE).unwrap(), 0);
        assert!(matches!(
            book.record_claim(&pool, &stranger, REFERENCE),
            Err(VestingError::NoSchedule)
        ));
    }

    #[test]
    fn space_fits_max_schedules() {
        assert_eq!(VestingSchedule::SIZE, 64);
        assert_eq!(ScheduleBook::space(MAX_SCHEDULES), 8 + 32 + 4 + 64 * 64);
    }
}
