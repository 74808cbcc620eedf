// 🏷️ Transaction Codes - single-character code per transaction category
//
// Lookup data only. No deposit/withdraw/interest processing exists yet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccountError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCode {
    Deposit,
    Withdraw,
    Interest,
    Rejected,
}

impl TransactionCode {
    pub const ALL: [TransactionCode; 4] = [
        TransactionCode::Deposit,
        TransactionCode::Withdraw,
        TransactionCode::Interest,
        TransactionCode::Rejected,
    ];

    pub fn code(&self) -> char {
        match self {
            TransactionCode::Deposit => 'D',
            TransactionCode::Withdraw => 'W',
            TransactionCode::Interest => 'I',
            TransactionCode::Rejected => 'X',
        }
    }

    /// Category name as used in the lookup table
    pub fn category(&self) -> &'static str {
        match self {
            TransactionCode::Deposit => "deposit",
            TransactionCode::Withdraw => "withdraw",
            TransactionCode::Interest => "interest",
            TransactionCode::Rejected => "rejected",
        }
    }

    pub fn from_category(category: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.category() == category)
            .ok_or_else(|| {
                AccountError::invalid(
                    "transaction_code",
                    format!("unknown transaction category: {:?}", category),
                )
            })
    }

    pub fn from_code(code: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                AccountError::invalid(
                    "transaction_code",
                    format!("unknown transaction code: {:?}", code),
                )
            })
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
