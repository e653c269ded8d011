use std::cell::RefCell;
use std::rc::Rc;

use shared::{BalanceLedger, LedgerError};
use yew::prelude::*;

use crate::config::STARTING_BALANCE;

/// Page-wide play balance. The ledger lives behind a shared cell so two
/// clicks in the same frame both see the latest balance.
#[derive(Clone)]
pub struct BalanceHandle {
    ledger: Rc<RefCell<BalanceLedger>>,
    trigger: UseForceUpdateHandle,
}

impl BalanceHandle {
    pub fn balance(&self) -> f64 {
        self.ledger.borrow().balance()
    }

    pub fn credit(&self, amount: f64) -> Result<f64, LedgerError> {
        let result = self.ledger.borrow_mut().credit(amount);
        if result.is_ok() {
            self.trigger.force_update();
        }
        result
    }

    /// Runs `f` against the ledger and re-renders afterwards.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&mut BalanceLedger) -> T) -> T {
        let out = {
            let mut ledger = self.ledger.borrow_mut();
            f(&mut *ledger)
        };
        self.trigger.force_update();
        out
    }
}

#[hook]
pub fn use_balance() -> BalanceHandle {
    let ledger = use_mut_ref(|| BalanceLedger::new(STARTING_BALANCE));
    let trigger = use_force_update();

    BalanceHandle { ledger, trigger }
}
