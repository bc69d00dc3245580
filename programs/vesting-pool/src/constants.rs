//! Program-wide constants.

/// PDA seed for a vesting pool: `[POOL_SEED, mint, pool_id_le]`.
pub const POOL_SEED: &[u8] = b"vesting_pool";

/// PDA seed for a pool's schedule book: `[SCHEDULES_SEED, pool]`.
pub const SCHEDULES_SEED: &[u8] = b"schedules";

/// PDA seed for a pool's token vault: `[VAULT_SEED, pool]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Max schedules stored in one pool's schedule book.
pub const MAX_SCHEDULES: usize = 64;

/// Basis points denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed tranche length: 30 days.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
