// 🔢 Shared Context - transaction-id sequence and interest rate
//
// Every account opened against the same `BankContext` shares one sequence
// and one rate. Separate contexts never see each other's state.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, trace, warn};

use crate::config::BankConfig;
use crate::entities::TimeZone;
use crate::error::{AccountError, Result};

/// First transaction id handed out by a fresh sequence
pub const DEFAULT_FIRST_TRANSACTION_ID: u64 = 100;

/// Interest rate a fresh context starts with
pub const DEFAULT_INTEREST_RATE: f64 = 0.05;

// ============================================================================
// TRANSACTION SEQUENCE
// ============================================================================

/// Strictly increasing id source. Ids are never reused and there is no reset.
#[derive(Debug)]
pub struct TransactionSequence {
    next: AtomicU64,
}

impl TransactionSequence {
    pub fn starting_at(first: u64) -> Self {
        TransactionSequence {
            next: AtomicU64::new(first),
        }
    }

    /// Issue the next id.
    ///
    /// Fails once the counter cannot advance any further; `u64::MAX` itself
    /// is never issued, so every id returned is smaller than the next one.
    pub fn next_id(&self) -> Result<u64> {
        match self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
        {
            Ok(id) => {
                trace!(transaction_id = id, "issued transaction id");
                Ok(id)
            }
            Err(last) => {
                warn!(last, "transaction id sequence exhausted");
                Err(AccountError::invalid(
                    "transaction_id",
                    "transaction id sequence is exhausted",
                ))
            }
        }
    }

    /// Id the next call to `next_id` would return.
    ///
    /// Only a snapshot: a concurrent caller may take that id first.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for TransactionSequence {
    fn default() -> Self {
        Self::starting_at(DEFAULT_FIRST_TRANSACTION_ID)
    }
}

// ============================================================================
// INTEREST RATE
// ============================================================================

#[derive(Debug)]
pub struct InterestRate {
    value: RwLock<f64>,
}

impl InterestRate {
    /// Create a holder, rejecting the same values `set` would
    pub fn new(value: f64) -> Result<Self> {
        validate_rate(value)?;
        Ok(InterestRate {
            value: RwLock::new(value),
        })
    }

    pub fn get(&self) -> f64 {
        *self.value.read()
    }

    /// Replace the rate for every account sharing this holder
    pub fn set(&self, value: f64) -> Result<()> {
        if let Err(err) = validate_rate(value) {
            warn!(rate = value, error = %err, "rejected interest rate change");
            return Err(err);
        }

        let previous = {
            let mut guard = self.value.write();
            std::mem::replace(&mut *guard, value)
        };
        info!(previous, rate = value, "interest rate updated");
        Ok(())
    }
}

impl Default for InterestRate {
    fn default() -> Self {
        InterestRate {
            value: RwLock::new(DEFAULT_INTEREST_RATE),
        }
    }
}

fn validate_rate(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AccountError::invalid(
            "interest_rate",
            "value must be a real number",
        ));
    }
    if value < 0.0 {
        return Err(AccountError::invalid(
            "interest_rate",
            format!("value must not be negative, got {}", value),
        ));
    }
    Ok(())
}

// ============================================================================
// BANK CONTEXT
// ============================================================================

/// State shared by all accounts of one bank.
///
/// Pass it around as `Arc<BankContext>`; accounts keep a clone of the `Arc`.
#[derive(Debug, Default)]
pub struct BankContext {
    sequence: TransactionSequence,
    interest_rate: InterestRate,
    default_time_zone: TimeZone,
}

impl BankContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from loaded configuration, validating the rate and
    /// the default time zone with the same rules used at runtime
    pub fn from_config(config: &BankConfig) -> Result<Self> {
        let zone = &config.default_time_zone;
        let default_time_zone = TimeZone::new(&zone.name, zone.offset_hours, zone.offset_minutes)?;

        Ok(BankContext {
            sequence: TransactionSequence::starting_at(config.first_transaction_id),
            interest_rate: InterestRate::new(config.interest_rate)?,
            default_time_zone,
        })
    }

    pub fn sequence(&self) -> &TransactionSequence {
        &self.sequence
    }

    pub fn interest_rate(&self) -> &InterestRate {
        &self.interest_rate
    }

    /// Zone given to accounts opened without one
    pub fn default_time_zone(&self) -> &TimeZone {
        &self.default_time_zone
    }
}

// ============================================================================
// TESTS
// ============================================================================
