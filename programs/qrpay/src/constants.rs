use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

pub const USER_SEED: &[u8] = b"user";
pub const USER_STATS_SEED: &[u8] = b"user_stats";
pub const QR_SEED: &[u8] = b"qr";

// ══════════════════════════════════════════════════════════════════════════════
// RECORD LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Maximum byte length of a user's display name
pub const NAME_MAX_LEN: usize = 32;

/// Maximum number of QR codes a user may hold at once
pub const QRS_MAX_COUNT: usize = 5;

/// Maximum number of token mints a single QR code may whitelist
pub const TOKENS_MAX_COUNT: usize = 5;

/// Length of a QR content hash (lowercase hex, first 16 bytes of SHA-256)
pub const QR_HASH_LEN: usize = 32;

// ══════════════════════════════════════════════════════════════════════════════
// TRANSFER PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// Flat fee charged on native transfers, retained by the QR account
pub const TRANSFER_FEE_LAMPORTS: u64 = 5_000;

/// Wrapped SOL mint: So11111111111111111111111111111111111111112
/// Doubles as the whitelist slot matched by native transfers.
pub const NATIVE_MINT: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172,
    28, 180, 133, 237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);
