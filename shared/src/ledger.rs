use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::catalog::Case;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0:?} is not a number")]
    NotANumber(String),

    #[error("Invalid amount: {0} must be a positive number")]
    NotPositive(f64),
}

/// Result of trying to pay for a case.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum Purchase {
    Approved { new_balance: f64 },
    Shortfall { missing: f64 },
}

/// Parses a free-form top-up amount as typed by the user.
pub fn parse_amount(input: &str) -> Result<f64, LedgerError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| LedgerError::NotANumber(input.to_string()))?;
    validate_amount(amount)
}

pub fn validate_amount(amount: f64) -> Result<f64, LedgerError> {
    if amount.is_nan() || amount.is_infinite() {
        return Err(LedgerError::NotANumber(amount.to_string()));
    }
    if amount <= 0.0 {
        return Err(LedgerError::NotPositive(amount));
    }
    Ok(amount)
}

/// In-memory play balance. Only `credit` and `debit` change it and it never
/// goes below zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct BalanceLedger {
    balance: f64,
}

impl BalanceLedger {
    pub fn new(initial: f64) -> Self {
        Self {
            balance: if initial.is_finite() { initial.max(0.0) } else { 0.0 },
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn credit(&mut self, amount: f64) -> Result<f64, LedgerError> {
        let amount = validate_amount(amount).map_err(|e| {
            log::warn!("Top-up rejected: {}", e);
            e
        })?;
        self.balance += amount;
        log::info!("Credited {} (balance {})", amount, self.balance);
        Ok(self.balance)
    }

    /// Spends `amount` if the balance covers it. Leaves the balance untouched
    /// and returns false otherwise.
    pub fn debit(&mut self, amount: f64) -> bool {
        if validate_amount(amount).is_err() || amount > self.balance {
            return false;
        }
        self.balance -= amount;
        log::info!("Debited {} (balance {})", amount, self.balance);
        true
    }

    /// How much is missing to afford `price`, if anything.
    pub fn shortfall(&self, price: f64) -> Option<f64> {
        if self.balance >= price {
            None
        } else {
            Some(price - self.balance)
        }
    }

    /// Check and debit in one step; the caller opens the case only on
    /// `Approved`.
    pub fn purchase(&mut self, case: &Case) -> Purchase {
        let price = case.price as f64;
        if let Some(missing) = self.shortfall(price) {
            log::info!("Cannot open {:?}: missing {}", case.name, missing);
            return Purchase::Shortfall { missing };
        }
        if price > 0.0 && !self.debit(price) {
            return Purchase::Shortfall { missing: price - self.balance };
        }
        Purchase::Approved { new_balance: self.balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_case;

    #[test]
    fn test_debit_over_balance_fails_unchanged() {
        let mut ledger = BalanceLedger::new(100.0);
        assert!(!ledger.debit(100.5));
        assert_eq!(ledger.balance(), 100.0);
        assert!(ledger.debit(100.0));
        assert_eq!(ledger.balance(), 0.0);
        assert!(!ledger.debit(1.0));
    }

    #[test]
    fn test_debit_rejects_non_positive() {
        let mut ledger = BalanceLedger::new(50.0);
        assert!(!ledger.debit(0.0));
        assert!(!ledger.debit(-10.0));
        assert_eq!(ledger.balance(), 50.0);
    }

    #[test]
    fn test_credit_rejects_non_positive() {
        let mut ledger = BalanceLedger::new(10.0);
        assert_eq!(ledger.credit(0.0), Err(LedgerError::NotPositive(0.0)));
        assert_eq!(ledger.credit(-3.0), Err(LedgerError::NotPositive(-3.0)));
        assert!(ledger.credit(f64::NAN).is_err());
        assert_eq!(ledger.balance(), 10.0);
        assert_eq!(ledger.credit(2.5), Ok(12.5));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250"), Ok(250.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert!(matches!(parse_amount(""), Err(LedgerError::NotANumber(_))));
        assert!(matches!(parse_amount("abc"), Err(LedgerError::NotANumber(_))));
        assert!(matches!(parse_amount("NaN"), Err(LedgerError::NotANumber(_))));
        assert!(matches!(parse_amount("inf"), Err(LedgerError::NotANumber(_))));
        assert_eq!(parse_amount("0"), Err(LedgerError::NotPositive(0.0)));
        assert_eq!(parse_amount("-5"), Err(LedgerError::NotPositive(-5.0)));
    }

    #[test]
    fn test_purchase_debits_before_opening() {
        let mut ledger = BalanceLedger::new(1000.0);
        let case = find_case(2).unwrap();
        assert_eq!(ledger.purchase(case), Purchase::Approved { new_balance: 501.0 });
        assert_eq!(ledger.balance(), 501.0);
    }

    #[test]
    fn test_purchase_reports_shortfall() {
        let mut ledger = BalanceLedger::new(100.0);
        let case = find_case(1).unwrap();
        assert_eq!(ledger.purchase(case), Purchase::Shortfall { missing: 99.0 });
        assert_eq!(ledger.balance(), 100.0);

        ledger.credit(99.0).unwrap();
        assert_eq!(ledger.purchase(case), Purchase::Approved { new_balance: 0.0 });
    }

    #[test]
    fn test_new_clamps_bad_initial_balance() {
        assert_eq!(BalanceLedger::new(-20.0).balance(), 0.0);
        assert_eq!(BalanceLedger::new(f64::INFINITY).balance(), 0.0);
    }
}
