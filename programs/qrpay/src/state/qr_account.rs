use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// A pre-declared transfer capability, addressed by (authority, content hash)
///
/// The token whitelist and amount policy are immutable after creation; only
/// the transfer instructions mutate the per-token statistics.
///
/// `authority` stays the first field so getProgramAccounts memcmp filters at
/// offset 8 keep working.
#[account]
#[derive(InitSpace)]
pub struct QrAccount {
    /// Wallet that owns this QR code and receives its transfers
    pub authority: Pubkey,
    /// Required transfer amount; 0 means the sender chooses
    pub amount: u64,
    /// Timestamp of the last transfer against this QR code
    pub last_transfer_timestamp: i64,
    /// PDA bump seed
    pub bump: u8,
    /// Whitelisted token mints, 1 to 5 entries, no duplicates
    #[max_len(5)]
    pub tokens: Vec<Pubkey>,
    /// Per-token statistics, parallel to `tokens`
    #[max_len(5)]
    pub tokens_stats: Vec<TokenStats>,
    /// Content hash, also the trailing PDA seed and the QR payload
    #[max_len(32)]
    pub hash: String,
}

impl QrAccount {
    /// Index of `mint` in the whitelist, if present.
    pub fn token_index(&self, mint: &Pubkey) -> Option<usize> {
        self.tokens.iter().position(|t| t == mint)
    }

    /// Amount policy: zero pins nothing, any other value must match exactly.
    pub fn accepts_amount(&self, amount: u64) -> bool {
        self.amount == 0 || self.amount == amount
    }

    /// Record a completed transfer of `amount` against token slot `index`.
    ///
    /// Counters use checked arithmetic; `total_value` stays denominated in
    /// raw amounts until a price conversion source exists.
    pub fn record_transfer(&mut self, index: usize, amount: u64, timestamp: i64) -> Result<()> {
        let stats = self
            .tokens_stats
            .get_mut(index)
            .ok_or(ErrorCode::TokenNotExistsInQrAccount)?;
        stats.transfer_count = stats
            .transfer_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        stats.total_amount = stats
            .total_amount
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        stats.total_value = stats
            .total_value
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.last_transfer_timestamp = timestamp;
        Ok(())
    }
}

/// Cumulative statistics for one whitelisted token
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct TokenStats {
    /// Number of transfers of this token
    pub transfer_count: u64,
    /// Total amount transferred, in raw token units
    pub total_amount: u64,
    /// Total value transferred, amount-denominated
    pub total_value: u64,
}

/// True if `tokens` contains the same mint twice.
pub fn has_repeated_tokens(tokens: &[Pubkey]) -> bool {
    let mut seen = tokens.to_vec();
    seen.sort();
    seen.dedup();
    seen.len() != tokens.len()
}
