use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// USER LIFECYCLE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a user record is initialized
#[event]
pub struct UserInitialized {
    pub authority: Pubkey,
    pub name: String,
    pub timestamp: i64,
}

/// Emitted when a user record is closed
#[event]
pub struct UserRemoved {
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a user statistics record is initialized
#[event]
pub struct UserStatsInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a user statistics record is closed
#[event]
pub struct UserStatsRemoved {
    pub authority: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// QR LIFECYCLE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a QR account is created and registered with its user
#[event]
pub struct QrInitialized {
    pub authority: Pubkey,
    pub hash: String,
    pub amount: u64,
    pub token_count: u8,
    pub timestamp: i64,
}

/// Emitted when a QR account is closed and unregistered
#[event]
pub struct QrRemoved {
    pub authority: Pubkey,
    pub hash: String,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// TRANSFER EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a native transfer against a QR account completes
#[event]
pub struct LamportsTransferred {
    pub qr_account: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub timestamp: i64,
}

/// Emitted when an SPL token transfer against a QR account completes
#[event]
pub struct SplTransferred {
    pub qr_account: Pubkey,
    pub from: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
