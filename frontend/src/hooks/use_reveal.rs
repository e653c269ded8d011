use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::{RevealPhase, RevealSequencer, RevealSession, SessionEnd, SpinStage, TransitionStage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{self, REEL_MOUNT_DELAY_MS};

/// Owns the reveal sequencer for the page and schedules its timers.
///
/// Timers cannot be cancelled once spawned. Each one carries the session id
/// it was scheduled under and the sequencer drops it if the modal was closed
/// or reopened in the meantime.
#[derive(Clone)]
pub struct RevealHandle {
    sequencer: Rc<RefCell<RevealSequencer>>,
    reel_stage: UseStateHandle<Option<TransitionStage>>,
    trigger: UseForceUpdateHandle,
}

impl RevealHandle {
    pub fn session(&self) -> Option<RevealSession> {
        self.sequencer.borrow().session().cloned()
    }

    /// Transition currently applied to the reel, `None` for the rest position.
    pub fn reel_stage(&self) -> Option<TransitionStage> {
        (*self.reel_stage).clone()
    }

    pub fn with_sequencer<T>(&self, f: impl FnOnce(&mut RevealSequencer) -> T) -> T {
        let out = {
            let mut sequencer = self.sequencer.borrow_mut();
            f(&mut *sequencer)
        };
        self.reel_stage.set(None);
        self.trigger.force_update();
        out
    }

    pub fn spin(&self) {
        let plan = self
            .sequencer
            .borrow_mut()
            .start_spin(&mut rand::thread_rng(), config::viewport_width());
        let Some(plan) = plan else {
            return;
        };
        self.reel_stage.set(None);
        self.trigger.force_update();

        let sequencer = self.sequencer.clone();
        let reel_stage = self.reel_stage.clone();
        let trigger = self.trigger.clone();

        spawn_local(async move {
            let token = plan.session;

            TimeoutFuture::new(REEL_MOUNT_DELAY_MS).await;
            if sequencer.borrow().phase() != Some(RevealPhase::Spinning(SpinStage::Launch))
                || !sequencer.borrow().is_current(token)
            {
                return;
            }
            reel_stage.set(Some(plan.launch.clone()));

            TimeoutFuture::new(plan.launch.duration_ms).await;
            let settle = sequencer.borrow_mut().begin_settle(token);
            let Some(settle) = settle else {
                return;
            };
            reel_stage.set(Some(settle));

            TimeoutFuture::new(plan.result_delay_ms).await;
            let winner = sequencer.borrow_mut().reveal(token);
            if let Some(item) = winner {
                log::info!("Revealed {} ({}, {})", item.name, item.rarity, item.price);
                reel_stage.set(None);
                trigger.force_update();
            }
        });
    }

    pub fn close(&self) -> Option<SessionEnd> {
        self.with_sequencer(|sequencer| sequencer.close())
    }
}

#[hook]
pub fn use_reveal() -> RevealHandle {
    let sequencer = use_mut_ref(|| RevealSequencer::new(config::reveal_config()));
    let reel_stage = use_state(|| None::<TransitionStage>);
    let trigger = use_force_update();

    RevealHandle {
        sequencer,
        reel_stage,
        trigger,
    }
}
