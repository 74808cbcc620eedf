// Entity Models
//
// - TimeZone: immutable value, equal by (name, offset_hours, offset_minutes)
// - Account: stable account number, re-validated holder names
// - TransactionCode: category → single-character code lookup

pub mod time_zone;
pub mod account;
pub mod transaction_code;

pub use time_zone::TimeZone;
pub use account::{validate_name, Account, MAX_NAME_LENGTH};
pub use transaction_code::TransactionCode;
