pub mod bps;
pub mod coordinator;
pub mod time;
pub mod vesting;
