// Account Core - Library
// Validated bank account entities, time zones and the shared context
// (transaction-id sequence + interest rate) they draw from.

pub mod error;
pub mod config;
pub mod context;
pub mod entities;

// Re-export commonly used types
pub use error::{AccountError, Result};
pub use config::{BankConfig, TimeZoneSettings};
pub use context::{
    BankContext, InterestRate, TransactionSequence,
    DEFAULT_FIRST_TRANSACTION_ID, DEFAULT_INTEREST_RATE,
};
pub use entities::{Account, TimeZone, TransactionCode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
