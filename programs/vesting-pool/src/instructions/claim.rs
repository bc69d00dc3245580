use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{POOL_SEED, SCHEDULES_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{ScheduleBook, VestingPool};
use crate::utils::coordinator;

pub fn claim(ctx: Context<Claim>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();

    // Everything the transfer closure needs is captured before pool/book are borrowed mutably.
    let pool_ai = ctx.accounts.pool.to_account_info();
    let vault_ai = ctx.accounts.vault.to_account_info();
    let destination_ai = ctx.accounts.beneficiary_token_account.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let vault_balance = ctx.accounts.vault.amount;
    let mint = ctx.accounts.pool.config.mint;
    let pool_id = ctx.accounts.pool.pool_id.to_le_bytes();
    let pool_bump = [ctx.accounts.pool.bump];

    let pool = &mut ctx.accounts.pool;
    let book = &mut ctx.accounts.schedule_book;

    // Schedule is advanced before the CPI; the transfer runs last.
    let receipt = coordinator::claim_with(book, pool, &beneficiary, now, |amount| {
        require!(vault_balance >= amount, VestingError::InsufficientVaultBalance);
        let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, mint.as_ref(), &pool_id, &pool_bump]];
        token::transfer(
            CpiContext::new_with_signer(
                token_program_ai,
                Transfer {
                    from: vault_ai,
                    to: destination_ai,
                    authority: pool_ai,
                },
                signer_seeds,
            ),
            amount,
        )
    })?;

    let fully_released = book
        .get(&beneficiary)
        .map(|s| s.is_fully_released())
        .unwrap_or(false);
    msg!(
        "released {} to {} (total {}, done: {})",
        receipt.amount,
        beneficiary,
        receipt.released_total,
        fully_released
    );
    emit!(TokensReleased {
        beneficiary,
        amount: receipt.amount,
        released_total: receipt.released_total,
        claimed_at: receipt.claimed_at,
    });

    Ok(receipt.amount)
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.config.mint.as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [SCHEDULES_SEED, pool.key().as_ref()],
        bump,
        has_one = pool @ VestingError::InvalidConfig,
    )]
    pub schedule_book: Box<Account<'info, ScheduleBook>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == pool.config.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub claimed_at: i64,
}
