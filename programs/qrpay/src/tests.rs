// ============================================================================
// UNIT TESTS FOR QRPAY PROGRAM
// ============================================================================
//
// This module contains unit tests for the core logic of the program.
// Run with: cargo test --lib
//
// Test Categories:
// 1. Content Hash Derivation - derive_qr_hash determinism and uniqueness
// 2. User Record - bounded hash list membership
// 3. User Statistics - transfer accounting and overflow handling
// 4. QR Account - amount policy, token resolution, per-token accounting
// 5. Fee Arithmetic - flat fee on native transfers
// ============================================================================

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{
        // Constants
        constants::{
            NAME_MAX_LEN, NATIVE_MINT, QRS_MAX_COUNT, QR_HASH_LEN, TOKENS_MAX_COUNT,
            TRANSFER_FEE_LAMPORTS,
        },
        // Functions
        helpers::derive_qr_hash,
        state::{has_repeated_tokens, QrAccount, TokenStats, User, UserStats},
        // Types
        errors::ErrorCode,
    };
    use anchor_lang::prelude::*;

    fn sample_qr(amount: u64, tokens: Vec<Pubkey>) -> QrAccount {
        let authority = Pubkey::new_unique();
        let hash = derive_qr_hash(&authority, amount, &tokens);
        QrAccount {
            authority,
            amount,
            last_transfer_timestamp: 0,
            bump: 255,
            tokens_stats: vec![TokenStats::default(); tokens.len()],
            tokens,
            hash,
        }
    }

    fn sample_user(hashes: Vec<String>) -> User {
        User {
            authority: Pubkey::new_unique(),
            name: "TestUser".to_string(),
            hashes,
            bump: 255,
        }
    }

    // ========================================================================
    // 1. CONTENT HASH DERIVATION TESTS
    // ========================================================================

    mod hash_tests {
        use super::*;

        #[test]
        fn test_derive_qr_hash_deterministic() {
            let authority = Pubkey::new_unique();
            let tokens = vec![Pubkey::new_unique(), Pubkey::new_unique()];

            let first = derive_qr_hash(&authority, 1000, &tokens);
            let second = derive_qr_hash(&authority, 1000, &tokens);

            assert_eq!(first, second);
        }

        #[test]
        fn test_derive_qr_hash_length_and_charset() {
            let authority = Pubkey::new_unique();
            let hash = derive_qr_hash(&authority, 0, &[Pubkey::new_unique()]);

            assert_eq!(hash.len(), QR_HASH_LEN);
            assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn test_derive_qr_hash_differs_on_authority() {
            let tokens = vec![Pubkey::new_unique()];
            let a = derive_qr_hash(&Pubkey::new_unique(), 500, &tokens);
            let b = derive_qr_hash(&Pubkey::new_unique(), 500, &tokens);
            assert_ne!(a, b);
        }

        #[test]
        fn test_derive_qr_hash_differs_on_amount() {
            let authority = Pubkey::new_unique();
            let tokens = vec![Pubkey::new_unique()];
            let a = derive_qr_hash(&authority, 500, &tokens);
            let b = derive_qr_hash(&authority, 501, &tokens);
            assert_ne!(a, b);
        }

        #[test]
        fn test_derive_qr_hash_differs_on_token_set() {
            let authority = Pubkey::new_unique();
            let x = Pubkey::new_unique();
            let y = Pubkey::new_unique();

            let a = derive_qr_hash(&authority, 500, &[x]);
            let b = derive_qr_hash(&authority, 500, &[y]);
            assert_ne!(a, b);

            // Declaration order is significant: it maps tokens to stats slots
            let ab = derive_qr_hash(&authority, 500, &[x, y]);
            let ba = derive_qr_hash(&authority, 500, &[y, x]);
            assert_ne!(ab, ba);
        }
    }

    // ========================================================================
    // 2. USER RECORD TESTS
    // ========================================================================

    mod user_tests {
        use super::*;

        #[test]
        fn test_has_hash_membership() {
            let user = sample_user(vec!["aa".to_string(), "bb".to_string()]);

            assert!(user.has_hash("aa"));
            assert!(user.has_hash("bb"));
            assert!(!user.has_hash("cc"));
        }

        #[test]
        fn test_hash_index_positions() {
            let user = sample_user(vec!["aa".to_string(), "bb".to_string()]);

            assert_eq!(user.hash_index("aa"), Some(0));
            assert_eq!(user.hash_index("bb"), Some(1));
            assert_eq!(user.hash_index("cc"), None);
        }

        #[test]
        fn test_is_full_at_capacity() {
            let hashes: Vec<String> = (0..QRS_MAX_COUNT).map(|i| format!("{i}")).collect();
            let full = sample_user(hashes);
            assert!(full.is_full());

            let mut almost = full;
            almost.hashes.pop();
            assert!(!almost.is_full());
        }

        #[test]
        fn test_removal_frees_a_slot() {
            let hashes: Vec<String> = (0..QRS_MAX_COUNT).map(|i| format!("{i}")).collect();
            let mut user = sample_user(hashes);
            assert!(user.is_full());

            let index = user.hash_index("2").unwrap();
            user.hashes.remove(index);

            assert!(!user.is_full());
            assert!(!user.has_hash("2"));
            assert_eq!(user.hashes.len(), QRS_MAX_COUNT - 1);
        }

        #[test]
        fn test_name_length_boundary() {
            assert!("A".repeat(32).len() <= NAME_MAX_LEN);
            assert!("A".repeat(33).len() > NAME_MAX_LEN);
        }
    }

    // ========================================================================
    // 3. USER STATISTICS TESTS
    // ========================================================================

    mod user_stats_tests {
        use super::*;

        #[test]
        fn test_record_transfer_updates_counters() {
            let mut stats = UserStats::default();

            stats.record_transfer(500, 1_700_000_000).unwrap();

            assert_eq!(stats.total_transfers, 1);
            assert_eq!(stats.total_value_transferred, 500);
            assert_eq!(stats.last_active_timestamp, 1_700_000_000);
        }

        #[test]
        fn test_record_transfer_accumulates() {
            let mut stats = UserStats::default();

            stats.record_transfer(500, 100).unwrap();
            stats.record_transfer(250, 200).unwrap();

            assert_eq!(stats.total_transfers, 2);
            assert_eq!(stats.total_value_transferred, 750);
            assert_eq!(stats.last_active_timestamp, 200);
        }

        #[test]
        fn test_record_transfer_value_overflow() {
            let mut stats = UserStats {
                total_value_transferred: u64::MAX,
                ..UserStats::default()
            };

            let result = stats.record_transfer(1, 100);
            assert_eq!(result.unwrap_err(), ErrorCode::ArithmeticOverflow.into());
        }

        #[test]
        fn test_record_transfer_count_overflow() {
            let mut stats = UserStats {
                total_transfers: u64::MAX,
                ..UserStats::default()
            };

            assert!(stats.record_transfer(1, 100).is_err());
        }

        #[test]
        fn test_record_qr_created() {
            let mut stats = UserStats::default();

            stats.record_qr_created().unwrap();
            stats.record_qr_created().unwrap();
            assert_eq!(stats.qr_codes_created, 2);

            stats.qr_codes_created = u64::MAX;
            assert!(stats.record_qr_created().is_err());
        }
    }

    // ========================================================================
    // 4. QR ACCOUNT TESTS
    // ========================================================================

    mod qr_account_tests {
        use super::*;

        #[test]
        fn test_token_index_resolution() {
            let x = Pubkey::new_unique();
            let y = Pubkey::new_unique();
            let qr = sample_qr(0, vec![x, y]);

            assert_eq!(qr.token_index(&x), Some(0));
            assert_eq!(qr.token_index(&y), Some(1));
            assert_eq!(qr.token_index(&Pubkey::new_unique()), None);
        }

        #[test]
        fn test_native_slot_resolution() {
            let qr = sample_qr(0, vec![Pubkey::new_unique(), NATIVE_MINT]);
            assert_eq!(qr.token_index(&NATIVE_MINT), Some(1));

            let no_native = sample_qr(0, vec![Pubkey::new_unique()]);
            assert_eq!(no_native.token_index(&NATIVE_MINT), None);
        }

        #[test]
        fn test_fixed_amount_policy() {
            let qr = sample_qr(1000, vec![Pubkey::new_unique()]);

            assert!(qr.accepts_amount(1000));
            assert!(!qr.accepts_amount(999));
            assert!(!qr.accepts_amount(1001));
        }

        #[test]
        fn test_variable_amount_policy() {
            let qr = sample_qr(0, vec![Pubkey::new_unique()]);

            assert!(qr.accepts_amount(1));
            assert!(qr.accepts_amount(500));
            assert!(qr.accepts_amount(u64::MAX));
        }

        #[test]
        fn test_initial_stats_are_zeroed_and_parallel() {
            let tokens = vec![Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
            let qr = sample_qr(0, tokens);

            assert_eq!(qr.tokens_stats.len(), qr.tokens.len());
            for stats in &qr.tokens_stats {
                assert_eq!(stats.transfer_count, 0);
                assert_eq!(stats.total_amount, 0);
                assert_eq!(stats.total_value, 0);
            }
            assert_eq!(qr.last_transfer_timestamp, 0);
        }

        #[test]
        fn test_record_transfer_updates_matched_slot_only() {
            let mut qr = sample_qr(0, vec![Pubkey::new_unique(), Pubkey::new_unique()]);

            qr.record_transfer(0, 500, 1_700_000_000).unwrap();

            assert_eq!(qr.tokens_stats[0].transfer_count, 1);
            assert_eq!(qr.tokens_stats[0].total_amount, 500);
            assert_eq!(qr.tokens_stats[0].total_value, 500);
            assert_eq!(qr.tokens_stats[1].transfer_count, 0);
            assert_eq!(qr.tokens_stats[1].total_amount, 0);
            assert_eq!(qr.last_transfer_timestamp, 1_700_000_000);
        }

        #[test]
        fn test_record_transfer_out_of_range_slot() {
            let mut qr = sample_qr(0, vec![Pubkey::new_unique()]);

            let result = qr.record_transfer(1, 500, 100);
            assert_eq!(
                result.unwrap_err(),
                ErrorCode::TokenNotExistsInQrAccount.into()
            );
        }

        #[test]
        fn test_record_transfer_overflow() {
            let mut qr = sample_qr(0, vec![Pubkey::new_unique()]);
            qr.tokens_stats[0].total_amount = u64::MAX;

            let result = qr.record_transfer(0, 1, 100);
            assert_eq!(result.unwrap_err(), ErrorCode::ArithmeticOverflow.into());
        }

        #[test]
        fn test_has_repeated_tokens() {
            let x = Pubkey::new_unique();
            let y = Pubkey::new_unique();

            assert!(!has_repeated_tokens(&[x, y]));
            assert!(has_repeated_tokens(&[x, y, x]));
            assert!(has_repeated_tokens(&[x, x]));
            assert!(!has_repeated_tokens(&[]));
        }

        #[test]
        fn test_token_count_bounds() {
            // 1..=5 tokens is valid; 0 and 6 are rejected by the handler
            let six: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
            assert!(six.len() > TOKENS_MAX_COUNT);

            let five: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
            assert!(!five.is_empty() && five.len() <= TOKENS_MAX_COUNT);
        }
    }

    // ========================================================================
    // 5. FEE ARITHMETIC TESTS
    // ========================================================================

    mod fee_tests {
        use super::*;

        #[test]
        fn test_native_transfer_debit_includes_fee() {
            let amount: u64 = 1_000_000;
            let sender_before: u64 = 10_000_000;
            let receiver_before: u64 = 0;

            // Sender pays amount + fee, receiver gets exactly amount
            let sender_after = sender_before - amount - TRANSFER_FEE_LAMPORTS;
            let receiver_after = receiver_before + amount;

            assert_eq!(sender_before - sender_after, amount + TRANSFER_FEE_LAMPORTS);
            assert_eq!(receiver_after - receiver_before, amount);
        }

        #[test]
        fn test_fee_is_constant_across_amounts() {
            for amount in [1u64, 500, 1_000_000_000] {
                let debit = amount + TRANSFER_FEE_LAMPORTS;
                assert_eq!(debit - amount, TRANSFER_FEE_LAMPORTS);
            }
        }
    }
}
