use anchor_lang::prelude::*;

use crate::constants::QRS_MAX_COUNT;

/// Per-wallet user record
///
/// Holds the display name and the authoritative list of QR content hashes
/// owned by this wallet. The list is bounded at five entries; membership is
/// checked by linear scan.
///
/// `authority` stays the first field so getProgramAccounts memcmp filters at
/// offset 8 (right after the discriminator) keep working.
#[account]
#[derive(InitSpace)]
pub struct User {
    /// Wallet that owns and may mutate this record
    pub authority: Pubkey,
    /// Display name, at most 32 bytes
    #[max_len(32)]
    pub name: String,
    /// Content hashes of the QR accounts registered to this user
    #[max_len(5, 32)]
    pub hashes: Vec<String>,
    /// PDA bump seed
    pub bump: u8,
}

impl User {
    pub fn has_hash(&self, hash: &str) -> bool {
        self.hashes.iter().any(|h| h == hash)
    }

    pub fn hash_index(&self, hash: &str) -> Option<usize> {
        self.hashes.iter().position(|h| h == hash)
    }

    pub fn is_full(&self) -> bool {
        self.hashes.len() >= QRS_MAX_COUNT
    }
}
