use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("5FgdTxiuqgW5x7QxSHYSvQC7MPXSChFcZsUTryLppuzN");

#[program]
pub mod vesting_pool {
    use super::*;

    /// Create the pool, its schedule book and its token vault.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        pool_id: u64,
        params: PoolParams,
    ) -> Result<()> {
        instructions::initialize_pool::initialize_pool(ctx, pool_id, params)
    }

    /// Owner funds the vault (never above the pool cap).
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn create_vesting_schedule(
        ctx: Context<CreateVestingSchedule>,
        beneficiary: Pubkey,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_vesting_schedule::create_vesting_schedule(
            ctx,
            beneficiary,
            total_amount,
        )
    }

    /// Release everything vested to the signer; returns the amount released.
    pub fn claim(ctx: Context<Claim>) -> Result<u64> {
        instructions::claim::claim(ctx)
    }

    pub fn calculate_claimable_amount(ctx: Context<CalculateClaimable>) -> Result<u64> {
        instructions::calculate_claimable::calculate_claimable_amount(ctx)
    }

    pub fn get_schedule(
        ctx: Context<ViewSchedule>,
        beneficiary: Pubkey,
    ) -> Result<Option<VestingSchedule>> {
        instructions::views::get_schedule(ctx, beneficiary)
    }

    pub fn get_pool_config(ctx: Context<ViewPool>) -> Result<PoolConfig> {
        instructions::views::get_pool_config(ctx)
    }

    pub fn get_allocation(ctx: Context<ViewPool>) -> Result<AllocationSummary> {
        instructions::views::get_allocation(ctx)
    }
}
