// 💳 Account Entity - validated holder names, balance and time zone
//
// "Account number is IDENTITY (never changes), names and zone are VALUES"
//
// - account_number and balance are read-only after opening
// - first/last name setters re-run validation, a rejected value leaves
//   the old one in place
// - transaction ids and interest rate come from the shared BankContext

use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

use crate::context::BankContext;
use crate::entities::TimeZone;
use crate::error::{AccountError, Result};

// ============================================================================
// NAME RULES
// ============================================================================

/// Longest accepted first/last name, in characters
pub const MAX_NAME_LENGTH: usize = 30;

/// Runs of letters, apostrophes and hyphens separated by single spaces
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z'-]+(?: [A-Za-z'-]+)*$").expect("name pattern is a valid regex")
});

/// Check a holder name. `field` names the error, `title` is used in the message.
pub fn validate_name(field: &str, title: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || value.chars().count() > MAX_NAME_LENGTH {
        return Err(AccountError::invalid(
            field,
            format!(
                "{} must be between 1 and {} characters",
                title, MAX_NAME_LENGTH
            ),
        ));
    }

    if !NAME_PATTERN.is_match(value) {
        return Err(AccountError::invalid(
            field,
            format!(
                "{} contains invalid characters. Only letters, - and ' are allowed",
                title
            ),
        ));
    }

    Ok(())
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone)]
pub struct Account {
    /// Opaque identifier, no format rules
    account_number: String,

    first_name: String,
    last_name: String,

    /// Opening balance; nothing in this crate moves money
    balance: f64,

    time_zone: TimeZone,

    /// Sequence + interest rate shared with every other account of the bank
    context: Arc<BankContext>,
}

impl Account {
    /// Open an account with the bank's default time zone and a zero balance
    pub fn new(
        context: &Arc<BankContext>,
        account_number: impl Into<String>,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self> {
        Self::open(context, account_number, first_name, last_name, None, 0.0)
    }

    /// Open an account. Either every field is valid and the account exists,
    /// or nothing is created.
    pub fn open(
        context: &Arc<BankContext>,
        account_number: impl Into<String>,
        first_name: &str,
        last_name: &str,
        time_zone: Option<TimeZone>,
        initial_balance: f64,
    ) -> Result<Self> {
        validate_name("first_name", "First name", first_name)?;
        validate_name("last_name", "Last name", last_name)?;

        let time_zone = time_zone.unwrap_or_else(|| context.default_time_zone().clone());

        let account = Account {
            account_number: account_number.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            balance: initial_balance,
            time_zone,
            context: Arc::clone(context),
        };

        debug!(
            account_number = %account.account_number,
            time_zone = %account.time_zone,
            balance = account.balance,
            "opened account"
        );

        Ok(account)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        if let Err(err) = validate_name("first_name", "First name", value) {
            warn!(account_number = %self.account_number, error = %err, "rejected first name");
            return Err(err);
        }
        self.first_name = value.to_string();
        debug!(account_number = %self.account_number, "first name updated");
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        if let Err(err) = validate_name("last_name", "Last name", value) {
            warn!(account_number = %self.account_number, error = %err, "rejected last name");
            return Err(err);
        }
        self.last_name = value.to_string();
        debug!(account_number = %self.account_number, "last name updated");
        Ok(())
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// A `TimeZone` is valid by construction, so this cannot fail
    pub fn set_time_zone(&mut self, time_zone: TimeZone) {
        debug!(account_number = %self.account_number, time_zone = %time_zone, "time zone updated");
        self.time_zone = time_zone;
    }

    /// Shared rate; the same value every account of this bank sees
    pub fn interest_rate(&self) -> f64 {
        self.context.interest_rate().get()
    }

    /// Replace the shared rate for all current and future accounts of this bank
    pub fn set_interest_rate(&self, value: f64) -> Result<()> {
        self.context.interest_rate().set(value)
    }

    /// Issue the next transaction id from the bank-wide sequence
    pub fn next_transaction_id(&self) -> Result<u64> {
        self.context.sequence().next_id()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account(number={}, holder={} {}, balance={:.2}, {})",
            self.account_number, self.first_name, self.last_name, self.balance, self.time_zone
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
