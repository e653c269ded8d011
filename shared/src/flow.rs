//! Purchase gate in front of the reveal sequencer.
//!
//! Payment happens once, before the case opens. Closing the modal mid-spin
//! abandons the item but keeps the debit. "Open again" from the result view
//! goes straight to `RevealSequencer::open_again` and costs nothing.

use rand::Rng;

use crate::catalog::Case;
use crate::ledger::{BalanceLedger, Purchase};
use crate::sequencer::{RevealSequencer, SessionId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpenOutcome {
    Opened { session: SessionId, new_balance: f64 },
    /// The sequencer was not touched; offer a top-up of `missing`.
    Shortfall { missing: f64 },
}

pub fn open_case<R: Rng + ?Sized>(
    ledger: &mut BalanceLedger,
    sequencer: &mut RevealSequencer,
    case: &Case,
    rng: &mut R,
) -> OpenOutcome {
    match ledger.purchase(case) {
        Purchase::Approved { new_balance } => {
            let session = sequencer.open(rng, case.rarity);
            log::info!("Opened {:?} as {:?}", case.name, session);
            OpenOutcome::Opened { session, new_balance }
        }
        Purchase::Shortfall { missing } => OpenOutcome::Shortfall { missing },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_case;
    use crate::rarity::Rarity;
    use crate::sequencer::{RevealPhase, SpinStage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_open_rare_case_end_to_end() {
        let mut rng = StdRng::seed_from_u64(1000);
        let mut ledger = BalanceLedger::new(1000.0);
        let mut sequencer = RevealSequencer::default();
        let case = find_case(2).unwrap();
        assert_eq!(case.price, 499);

        let session = match open_case(&mut ledger, &mut sequencer, case, &mut rng) {
            OpenOutcome::Opened { session, new_balance } => {
                assert_eq!(new_balance, 501.0);
                session
            }
            other => panic!("expected open, got {:?}", other),
        };
        assert_eq!(ledger.balance(), 501.0);

        let plan = sequencer.start_spin(&mut rng, 1280.0).unwrap();
        assert_eq!(plan.session, session);
        assert_eq!(sequencer.phase(), Some(RevealPhase::Spinning(SpinStage::Launch)));

        sequencer.begin_settle(session).unwrap();
        let item = sequencer.reveal(session).unwrap();
        assert_eq!(sequencer.phase(), Some(RevealPhase::Result));
        assert!(Rarity::ALL.contains(&item.rarity));
        assert_eq!(sequencer.session().unwrap().winning_item, Some(item));
    }

    #[test]
    fn test_shortfall_never_opens() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ledger = BalanceLedger::new(100.0);
        let mut sequencer = RevealSequencer::default();
        let case = find_case(1).unwrap();

        let outcome = open_case(&mut ledger, &mut sequencer, case, &mut rng);
        assert_eq!(outcome, OpenOutcome::Shortfall { missing: 99.0 });
        assert_eq!(ledger.balance(), 100.0);
        assert!(sequencer.session().is_none());
    }

    #[test]
    fn test_close_mid_spin_keeps_debit() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut ledger = BalanceLedger::new(500.0);
        let mut sequencer = RevealSequencer::default();
        let case = find_case(9).unwrap();

        open_case(&mut ledger, &mut sequencer, case, &mut rng);
        sequencer.start_spin(&mut rng, 800.0).unwrap();
        let end = sequencer.close().unwrap();
        assert!(end.awarded.is_none());
        assert_eq!(ledger.balance(), 101.0);
    }

    #[test]
    fn test_open_again_leaves_balance_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ledger = BalanceLedger::new(1000.0);
        let mut sequencer = RevealSequencer::default();
        let case = find_case(2).unwrap();

        open_case(&mut ledger, &mut sequencer, case, &mut rng);
        let plan = sequencer.start_spin(&mut rng, 1280.0).unwrap();
        sequencer.begin_settle(plan.session);
        sequencer.reveal(plan.session);
        let before = ledger.balance();
        assert_eq!(before, 501.0);

        let next = sequencer.open_again(&mut rng).unwrap();
        assert_ne!(next, plan.session);
        assert_eq!(ledger.balance(), before);
        assert_eq!(sequencer.phase(), Some(RevealPhase::Ready));
        assert_eq!(sequencer.session().unwrap().case_rarity, case.rarity);
    }

    #[test]
    fn test_open_again_works_with_empty_balance() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ledger = BalanceLedger::new(399.0);
        let mut sequencer = RevealSequencer::default();
        let case = find_case(9).unwrap();

        open_case(&mut ledger, &mut sequencer, case, &mut rng);
        assert_eq!(ledger.balance(), 0.0);
        let plan = sequencer.start_spin(&mut rng, 800.0).unwrap();
        sequencer.begin_settle(plan.session);
        sequencer.reveal(plan.session);

        assert!(sequencer.open_again(&mut rng).is_some());
        assert_eq!(ledger.balance(), 0.0);
        assert_eq!(sequencer.phase(), Some(RevealPhase::Ready));
    }
}
