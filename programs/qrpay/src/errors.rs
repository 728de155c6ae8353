use anchor_lang::prelude::*;

/// QRPAY Error Codes
///
/// Every validation branch in the program maps to exactly one of these.
/// Account-existence failures (init over a live account, missing account on
/// fetch) and insufficient token balances surface from the runtime and the
/// token program respectively, not from this enum.
#[error_code]
pub enum ErrorCode {
    #[msg("Name is too long")]
    NameTooLong,

    #[msg("QR list is full")]
    QrListFull,

    #[msg("QR already registered for this user")]
    QrAlreadyExists,

    #[msg("QR not found")]
    QrNotFound,

    #[msg("QR hash does not match its contents")]
    QrHashMismatch,

    #[msg("QR must list between 1 and 5 tokens")]
    TooManyTokens,

    #[msg("QR has repeated tokens")]
    QrRepeatedTokens,

    #[msg("Transfer amount cannot be zero")]
    TransferAmountZero,

    #[msg("Wrong transfer amount")]
    WrongTransferAmount,

    #[msg("Token not accepted by this QR account")]
    TokenNotExistsInQrAccount,

    #[msg("Wrong transfer destination")]
    WrongTransferDestination,

    #[msg("Wrong transfer source")]
    WrongTransferSource,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
