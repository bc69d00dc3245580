use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;
use crate::state::VestingPool;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAllocation);

    let pool = &ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.owner.key(), pool.config.owner, VestingError::Unauthorized);

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        pool.config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );

    pool.check_deposit(ctx.accounts.vault.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    ctx.accounts.pool.check_deposit(ctx.accounts.vault.amount, 0)?;

    emit!(TokensDeposited {
        pool: ctx.accounts.pool.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
