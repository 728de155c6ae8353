use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod tests;

use constants::*;
use contexts::*;
use errors::ErrorCode;
use events::*;
use helpers::*;
use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod qrpay {
    use super::*;

    /// Create the user record for the signing wallet.
    ///
    /// Fails if a record already lives at the wallet's user PDA or if the
    /// name exceeds 32 bytes.
    pub fn initialize_user(ctx: Context<InitializeUser>, name: String) -> Result<()> {
        require!(name.len() <= NAME_MAX_LEN, ErrorCode::NameTooLong);

        let clock = Clock::get()?;
        let user = &mut ctx.accounts.user;
        user.authority = ctx.accounts.authority.key();
        user.name = name.clone();
        user.hashes = Vec::new();
        user.bump = ctx.bumps.user;

        emit!(UserInitialized {
            authority: user.authority,
            name,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Close the user record and refund its rent to the authority.
    ///
    /// QR accounts registered to the user are not cascaded; they stay
    /// addressable and removable by their owner.
    pub fn remove_user(ctx: Context<RemoveUser>) -> Result<()> {
        let clock = Clock::get()?;

        emit!(UserRemoved {
            authority: ctx.accounts.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Create the statistics record for the signing wallet, all counters
    /// zeroed. A wallet cannot receive QR transfers until this exists.
    pub fn initialize_user_stats(ctx: Context<InitializeUserStats>) -> Result<()> {
        let clock = Clock::get()?;
        let stats = &mut ctx.accounts.user_stats;
        stats.authority = ctx.accounts.authority.key();
        stats.qr_codes_created = 0;
        stats.total_transfers = 0;
        stats.total_value_transferred = 0;
        stats.last_active_timestamp = 0;
        stats.bump = ctx.bumps.user_stats;

        emit!(UserStatsInitialized {
            authority: stats.authority,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Close the statistics record and refund its rent to the authority.
    pub fn remove_user_stats(ctx: Context<RemoveUserStats>) -> Result<()> {
        let clock = Clock::get()?;

        emit!(UserStatsRemoved {
            authority: ctx.accounts.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Create a QR account and register its hash with the user record.
    ///
    /// `hash` must equal the hash recomputed from (authority, amount,
    /// tokens); it is passed in because the PDA seeds need it before the
    /// handler runs. The token whitelist and amount policy are immutable
    /// once created.
    pub fn initialize_user_qr(
        ctx: Context<InitializeUserQr>,
        hash: String,
        amount: u64,
        tokens: Vec<Pubkey>,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let authority = ctx.accounts.authority.key();

        require!(
            !tokens.is_empty() && tokens.len() <= TOKENS_MAX_COUNT,
            ErrorCode::TooManyTokens
        );
        require!(!has_repeated_tokens(&tokens), ErrorCode::QrRepeatedTokens);
        require!(
            hash == derive_qr_hash(&authority, amount, &tokens),
            ErrorCode::QrHashMismatch
        );

        let user = &mut ctx.accounts.user;
        require!(!user.is_full(), ErrorCode::QrListFull);
        require!(!user.has_hash(&hash), ErrorCode::QrAlreadyExists);
        user.hashes.push(hash.clone());

        let qr_account = &mut ctx.accounts.qr_account;
        qr_account.authority = authority;
        qr_account.amount = amount;
        qr_account.last_transfer_timestamp = 0;
        qr_account.bump = ctx.bumps.qr_account;
        qr_account.tokens_stats = vec![TokenStats::default(); tokens.len()];
        qr_account.tokens = tokens;
        qr_account.hash = hash.clone();

        if let Some(user_stats) = ctx.accounts.user_stats.as_mut() {
            user_stats.record_qr_created()?;
        }

        let token_count = qr_account.tokens.len() as u8;
        msg!("QR initialized: {} ({} tokens)", hash, token_count);

        emit!(QrInitialized {
            authority,
            hash,
            amount,
            token_count,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Close a QR account and unregister its hash from the user record.
    pub fn remove_user_qr(ctx: Context<RemoveUserQr>, hash: String) -> Result<()> {
        let clock = Clock::get()?;

        let user = &mut ctx.accounts.user;
        let index = user.hash_index(&hash).ok_or(ErrorCode::QrNotFound)?;
        user.hashes.remove(index);

        emit!(QrRemoved {
            authority: ctx.accounts.authority.key(),
            hash,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Execute a native transfer against a QR account.
    ///
    /// Validates the amount policy and the native-mint whitelist slot,
    /// requires `to` to be the QR authority, then moves `amount` lamports
    /// plus a flat fee that the QR account retains. Statistics on the QR
    /// account and the receiver's stats record update in the same
    /// instruction, so either everything commits or nothing does.
    pub fn qr_transfer_lamports(ctx: Context<QrTransferLamports>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        require!(amount > 0, ErrorCode::TransferAmountZero);

        let qr_account = &ctx.accounts.qr_account;
        require!(
            qr_account.accepts_amount(amount),
            ErrorCode::WrongTransferAmount
        );
        let index = qr_account
            .token_index(&NATIVE_MINT)
            .ok_or(ErrorCode::TokenNotExistsInQrAccount)?;
        require_keys_eq!(
            ctx.accounts.to.key(),
            qr_account.authority,
            ErrorCode::WrongTransferDestination
        );

        transfer_lamports(
            &ctx.accounts.from.to_account_info(),
            &ctx.accounts.to,
            &ctx.accounts.system_program.to_account_info(),
            amount,
        )?;
        transfer_lamports(
            &ctx.accounts.from.to_account_info(),
            &ctx.accounts.qr_account.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            TRANSFER_FEE_LAMPORTS,
        )?;

        let qr_account = &mut ctx.accounts.qr_account;
        qr_account.record_transfer(index, amount, clock.unix_timestamp)?;
        ctx.accounts
            .user_stats
            .record_transfer(amount, clock.unix_timestamp)?;

        msg!("Lamport transfer: {} (+{} fee)", amount, TRANSFER_FEE_LAMPORTS);

        emit!(LamportsTransferred {
            qr_account: ctx.accounts.qr_account.key(),
            from: ctx.accounts.from.key(),
            to: ctx.accounts.to.key(),
            amount,
            fee: TRANSFER_FEE_LAMPORTS,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Execute an SPL token transfer against a QR account.
    ///
    /// Same validation pipeline as the native path; the whitelist slot is
    /// resolved from the passed mint, and source/destination ownership is
    /// enforced by the account constraints. An insufficient balance fails
    /// inside the token program and rolls the instruction back.
    pub fn qr_transfer_spl(ctx: Context<QrTransferSpl>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        require!(amount > 0, ErrorCode::TransferAmountZero);

        let qr_account = &ctx.accounts.qr_account;
        require!(
            qr_account.accepts_amount(amount),
            ErrorCode::WrongTransferAmount
        );
        let mint = ctx.accounts.mint.key();
        let index = qr_account
            .token_index(&mint)
            .ok_or(ErrorCode::TokenNotExistsInQrAccount)?;

        transfer_tokens(
            &ctx.accounts.source,
            &ctx.accounts.destination,
            &ctx.accounts.mint,
            &ctx.accounts.from.to_account_info(),
            &ctx.accounts.token_program,
            amount,
        )?;

        let qr_account = &mut ctx.accounts.qr_account;
        qr_account.record_transfer(index, amount, clock.unix_timestamp)?;
        ctx.accounts
            .user_stats
            .record_transfer(amount, clock.unix_timestamp)?;

        msg!("SPL transfer: {} of {}", amount, mint);

        emit!(SplTransferred {
            qr_account: ctx.accounts.qr_account.key(),
            from: ctx.accounts.from.key(),
            mint,
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
