pub mod catalog;
pub mod config;
pub mod flow;
pub mod ledger;
pub mod pool;
pub mod rarity;
pub mod sequencer;

pub use catalog::{catalog, find_case, Case};
pub use config::RevealConfig;
pub use flow::{open_case, OpenOutcome};
pub use ledger::{BalanceLedger, LedgerError, Purchase};
pub use pool::{generate_pool, Item};
pub use rarity::{Rarity, RarityStyle};
pub use sequencer::{RevealPhase, RevealSequencer, RevealSession, SessionEnd, SessionId, SpinPlan, SpinStage, TransitionStage};
