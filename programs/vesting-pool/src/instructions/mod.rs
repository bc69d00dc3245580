pub mod initialize_pool;
pub mod deposit_tokens;
pub mod create_vesting_schedule;
pub mod claim;
pub mod calculate_claimable;
pub mod views;

pub use initialize_pool::*;
pub use deposit_tokens::*;
pub use create_vesting_schedule::*;
pub use claim::*;
pub use calculate_claimable::*;
pub use views::*;
