use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::RevealConfig;
use crate::pool::{generate_pool, Item};
use crate::rarity::Rarity;

/// Number of pool copies laid end to end on the reel.
pub const REEL_COPIES: usize = 3;

/// Identity of one reveal session. Deferred callbacks carry the id they were
/// scheduled under and are dropped when it no longer matches.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinStage {
    Launch,
    Settle,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Ready,
    Spinning(SpinStage),
    Result,
}

/// One timed leg of the reel animation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransitionStage {
    pub offset_px: f64,
    pub duration_ms: u32,
    pub easing: String,
}

impl TransitionStage {
    pub fn css_transition(&self) -> String {
        format!("transform {}s {}", self.duration_ms as f64 / 1000.0, self.easing)
    }

    /// Moves the strip left by `offset_px`. A negative offset (viewport wider
    /// than the reel) moves it right.
    pub fn css_transform(&self) -> String {
        // 0.0 - x keeps a zero offset from printing as "-0"
        format!("translateX({}px)", 0.0 - self.offset_px)
    }
}

/// Everything the renderer needs once a spin has started. The winner is
/// already decided here; the animation only catches up with it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub session: SessionId,
    pub winning_index: usize,
    pub winning_item: Item,
    pub launch: TransitionStage,
    pub settle: TransitionStage,
    /// Delay between the start of the settle stage and the result view.
    pub result_delay_ms: u32,
}

/// Reported to the surrounding flow when the modal closes.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEnd {
    pub session: SessionId,
    pub phase: RevealPhase,
    pub awarded: Option<Item>,
}

/// Scroll offset that centres the tile at `index` under the marker.
pub fn stop_offset(index: usize, item_span: f64, viewport_width: f64) -> f64 {
    index as f64 * item_span - viewport_width / 2.0 + item_span / 2.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSession {
    pub id: SessionId,
    pub case_rarity: Rarity,
    pub phase: RevealPhase,
    pub pool: Vec<Item>,
    pub winning_index: Option<usize>,
    pub winning_item: Option<Item>,
    settle: Option<TransitionStage>,
}

impl RevealSession {
    /// The pool tripled end to end, with positions on the reel.
    pub fn reel(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
        self.pool
            .iter()
            .cycle()
            .take(self.pool.len() * REEL_COPIES)
            .enumerate()
    }

    pub fn reel_len(&self) -> usize {
        self.pool.len() * REEL_COPIES
    }
}

/// Drives one case opening at a time through ready, spinning and result.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    config: RevealConfig,
    session: Option<RevealSession>,
    next_id: u64,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl RevealSequencer {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            session: None,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&RevealSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Option<RevealPhase> {
        self.session.as_ref().map(|s| s.phase)
    }

    /// True while `token` names the live session.
    pub fn is_current(&self, token: SessionId) -> bool {
        self.session.as_ref().map_or(false, |s| s.id == token)
    }

    fn fresh_session<R: Rng + ?Sized>(&mut self, rng: &mut R, case_rarity: Rarity) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.session = Some(RevealSession {
            id,
            case_rarity,
            phase: RevealPhase::Ready,
            pool: generate_pool(rng, case_rarity, self.config.pool_size),
            winning_index: None,
            winning_item: None,
            settle: None,
        });
        id
    }

    /// Starts a new session in `Ready`, replacing whatever was open.
    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R, case_rarity: Rarity) -> SessionId {
        if let Some(previous) = self.session.take() {
            log::debug!("Session {:?} replaced while {:?}", previous.id, previous.phase);
        }
        let id = self.fresh_session(rng, case_rarity);
        log::debug!("Session {:?} opened for {} case", id, case_rarity);
        id
    }

    /// `Ready -> Spinning(Launch)`. Picks the winner in the middle copy of
    /// the reel and freezes it for the rest of the session.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport_width: f64) -> Option<SpinPlan> {
        let config = &self.config;
        let session = self.session.as_mut()?;
        if session.phase != RevealPhase::Ready {
            log::debug!("Spin ignored for {:?} in {:?}", session.id, session.phase);
            return None;
        }
        let n = session.pool.len();
        if n == 0 {
            log::warn!("Spin ignored for {:?}: empty pool", session.id);
            return None;
        }

        let winning_index = rng.gen_range(0..n) + n;
        let winning_item = session.reel().nth(winning_index).map(|(_, item)| item.clone())?;

        let launch = TransitionStage {
            offset_px: config.launch_offset_px,
            duration_ms: config.launch_duration_ms,
            easing: config.launch_easing.clone(),
        };
        let settle = TransitionStage {
            offset_px: stop_offset(winning_index, config.item_span_px, viewport_width),
            duration_ms: config.settle_duration_ms,
            easing: config.settle_easing.clone(),
        };

        session.phase = RevealPhase::Spinning(SpinStage::Launch);
        session.winning_index = Some(winning_index);
        session.winning_item = Some(winning_item.clone());
        session.settle = Some(settle.clone());

        log::debug!(
            "Session {:?} spinning, winner at {} ({})",
            session.id,
            winning_index,
            winning_item.name
        );

        Some(SpinPlan {
            session: session.id,
            winning_index,
            winning_item,
            launch,
            settle,
            result_delay_ms: config.settle_duration_ms + config.result_grace_ms,
        })
    }

    fn current_for(&mut self, token: SessionId, expected: RevealPhase) -> Option<&mut RevealSession> {
        match self.session.as_mut() {
            Some(session) if session.id == token && session.phase == expected => Some(session),
            Some(session) => {
                log::debug!(
                    "Stale callback for {:?} ignored (current {:?} in {:?})",
                    token,
                    session.id,
                    session.phase
                );
                None
            }
            None => {
                log::debug!("Stale callback for {:?} ignored (no session)", token);
                None
            }
        }
    }

    /// Launch timer fired: `Spinning(Launch) -> Spinning(Settle)`.
    pub fn begin_settle(&mut self, token: SessionId) -> Option<TransitionStage> {
        let session = self.current_for(token, RevealPhase::Spinning(SpinStage::Launch))?;
        session.phase = RevealPhase::Spinning(SpinStage::Settle);
        session.settle.clone()
    }

    /// Settle timer fired: `Spinning(Settle) -> Result`, yielding the winner.
    pub fn reveal(&mut self, token: SessionId) -> Option<Item> {
        let session = self.current_for(token, RevealPhase::Spinning(SpinStage::Settle))?;
        session.phase = RevealPhase::Result;
        log::debug!("Session {:?} revealed", session.id);
        session.winning_item.clone()
    }

    /// `Result -> Ready` with a fresh pool under a new session id.
    pub fn open_again<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SessionId> {
        let session = self.session.as_ref()?;
        if session.phase != RevealPhase::Result {
            log::debug!("Open again ignored for {:?} in {:?}", session.id, session.phase);
            return None;
        }
        let case_rarity = session.case_rarity;
        let id = self.fresh_session(rng, case_rarity);
        log::debug!("Session {:?} reopened for {} case", id, case_rarity);
        Some(id)
    }

    /// Tears the session down from any phase. Only a session that reached
    /// `Result` awards its item.
    pub fn close(&mut self) -> Option<SessionEnd> {
        let session = self.session.take()?;
        let awarded = match session.phase {
            RevealPhase::Result => session.winning_item,
            _ => None,
        };
        log::debug!("Session {:?} closed in {:?}", session.id, session.phase);
        Some(SessionEnd {
            session: session.id,
            phase: session.phase,
            awarded,
        })
    }
}
