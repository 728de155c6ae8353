use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + User::INIT_SPACE,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump
    )]
    pub user: Account<'info, User>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RemoveUser<'info> {
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump = user.bump,
        has_one = authority @ ErrorCode::Unauthorized,
        close = authority
    )]
    pub user: Account<'info, User>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitializeUserStats<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + UserStats::INIT_SPACE,
        seeds = [USER_STATS_SEED, authority.key().as_ref()],
        bump
    )]
    pub user_stats: Account<'info, UserStats>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RemoveUserStats<'info> {
    #[account(
        mut,
        seeds = [USER_STATS_SEED, authority.key().as_ref()],
        bump = user_stats.bump,
        has_one = authority @ ErrorCode::Unauthorized,
        close = authority
    )]
    pub user_stats: Account<'info, UserStats>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(hash: String)]
pub struct InitializeUserQr<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + QrAccount::INIT_SPACE,
        seeds = [QR_SEED, authority.key().as_ref(), hash.as_bytes().as_ref()],
        bump
    )]
    pub qr_account: Account<'info, QrAccount>,
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump = user.bump
    )]
    pub user: Account<'info, User>,
    /// Creator's statistics record; bumps the created-codes counter when
    /// supplied. Creation itself does not require it.
    #[account(
        mut,
        seeds = [USER_STATS_SEED, authority.key().as_ref()],
        bump = user_stats.bump
    )]
    pub user_stats: Option<Account<'info, UserStats>>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(hash: String)]
pub struct RemoveUserQr<'info> {
    #[account(
        mut,
        seeds = [QR_SEED, authority.key().as_ref(), hash.as_bytes().as_ref()],
        bump = qr_account.bump,
        has_one = authority @ ErrorCode::Unauthorized,
        close = authority
    )]
    pub qr_account: Account<'info, QrAccount>,
    #[account(
        mut,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump = user.bump
    )]
    pub user: Account<'info, User>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct QrTransferLamports<'info> {
    #[account(mut)]
    pub from: Signer<'info>,
    /// CHECK: Receives lamports only; the handler requires it to match the
    /// QR account's authority.
    #[account(mut)]
    pub to: AccountInfo<'info>,
    #[account(
        mut,
        seeds = [QR_SEED, qr_account.authority.as_ref(), qr_account.hash.as_bytes().as_ref()],
        bump = qr_account.bump
    )]
    pub qr_account: Account<'info, QrAccount>,
    /// Statistics record of the receiving authority. Missing record fails
    /// account deserialization, which is the precondition that a receiver
    /// must have initialized stats before accepting transfers.
    #[account(
        mut,
        seeds = [USER_STATS_SEED, qr_account.authority.as_ref()],
        bump = user_stats.bump
    )]
    pub user_stats: Account<'info, UserStats>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct QrTransferSpl<'info> {
    pub from: Signer<'info>,
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        constraint = source.owner == from.key() @ ErrorCode::WrongTransferSource,
        constraint = source.mint == mint.key() @ ErrorCode::WrongTransferSource
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = destination.owner == qr_account.authority @ ErrorCode::WrongTransferDestination,
        constraint = destination.mint == mint.key() @ ErrorCode::WrongTransferDestination
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        seeds = [QR_SEED, qr_account.authority.as_ref(), qr_account.hash.as_bytes().as_ref()],
        bump = qr_account.bump
    )]
    pub qr_account: Account<'info, QrAccount>,
    /// Statistics record of the receiving authority; must exist before any
    /// transfer can be accepted.
    #[account(
        mut,
        seeds = [USER_STATS_SEED, qr_account.authority.as_ref()],
        bump = user_stats.bump
    )]
    pub user_stats: Account<'info, UserStats>,
    pub token_program: Interface<'info, TokenInterface>,
}
