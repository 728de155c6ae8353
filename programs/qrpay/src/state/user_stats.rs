use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Per-wallet aggregate transfer statistics
///
/// Lifecycle is independent from the User record, but a wallet must have
/// initialized this record before it can receive any QR transfer.
///
/// `authority` stays the first field so getProgramAccounts memcmp filters at
/// offset 8 keep working.
#[account]
#[derive(Default, InitSpace)]
pub struct UserStats {
    /// Wallet that owns this record
    pub authority: Pubkey,
    /// Total number of QR codes created by this wallet
    pub qr_codes_created: u64,
    /// Total number of transfers received
    pub total_transfers: u64,
    /// Total value received, denominated in raw transfer amounts
    pub total_value_transferred: u64,
    /// Timestamp of the last recorded transfer
    pub last_active_timestamp: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl UserStats {
    /// Count a newly created QR code.
    pub fn record_qr_created(&mut self) -> Result<()> {
        self.qr_codes_created = self
            .qr_codes_created
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Count a received transfer of `value` at `timestamp`.
    ///
    /// Counters are monotonically non-decreasing; overflow fails the whole
    /// instruction instead of wrapping.
    pub fn record_transfer(&mut self, value: u64, timestamp: i64) -> Result<()> {
        self.total_transfers = self
            .total_transfers
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.total_value_transferred = self
            .total_value_transferred
            .checked_add(value)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.last_active_timestamp = timestamp;
        Ok(())
    }
}
