use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::QR_HASH_LEN;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Derive the content hash of a QR code from its defining fields.
///
/// SHA-256 over authority, little-endian amount, and the token list in
/// declaration order; truncated to 16 bytes and rendered as 32 lowercase hex
/// characters so it fits a PDA seed. Deterministic: identical inputs always
/// produce the identical hash, which is what makes QR accounts addressable
/// without an index.
pub fn derive_qr_hash(authority: &Pubkey, amount: u64, tokens: &[Pubkey]) -> String {
    let amount_bytes = amount.to_le_bytes();
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(2 + tokens.len());
    seeds.push(authority.as_ref());
    seeds.push(&amount_bytes);
    for token in tokens {
        seeds.push(token.as_ref());
    }

    let digest = hashv(&seeds);
    hex_encode(&digest.to_bytes()[..QR_HASH_LEN / 2])
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}
