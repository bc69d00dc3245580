use anchor_lang::prelude::*;

/// Custom error codes for the vesting pool program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Unauthorized: no vesting schedule for caller")]
    NoSchedule,

    #[msg("Vesting already created")]
    DuplicateSchedule,

    #[msg("Pool allocation overflow")]
    CapExceeded,

    #[msg("No tokens claimable")]
    NothingClaimable,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid fraction (must be <= 10000 bps)")]
    InvalidFraction,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Schedule book is full")]
    ScheduleBookFull,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed pool cap")]
    OverDeposit,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
