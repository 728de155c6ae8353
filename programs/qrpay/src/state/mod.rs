pub mod qr_account;
pub mod user;
pub mod user_stats;

pub use qr_account::*;
pub use user::*;
pub use user_stats::*;
