use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use autoplay::*;
pub use stats::*;

mod autoplay;
mod stats;

/// Door index, `0..DOOR_COUNT`.
pub type Door = u8;

pub const DOOR_COUNT: Door = 3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    NotStarted,
    FirstChoicePending,
    Revealed,
    Resolved,
}

impl RoundPhase {
    const fn describe(self) -> &'static str {
        use RoundPhase::*;
        match self {
            NotStarted => "no round has started",
            FirstChoicePending => "waiting for the first pick",
            Revealed => "a door has been revealed",
            Resolved => "the round is resolved",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Stay,
    Switch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub decision: Decision,
    pub final_door: Door,
    pub prize_door: Door,
    pub is_winner: bool,
}

/// The three-door game. One instance lives for a whole session so that the
/// statistics accumulate across rounds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MontyHall {
    phase: RoundPhase,
    prize_door: Option<Door>,
    selected_door: Option<Door>,
    revealed_door: Option<Door>,
    result: Option<RoundResult>,
    stats: SessionStats,
}

impl MontyHall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doors(&self) -> impl Iterator<Item = Door> + use<> {
        0..DOOR_COUNT
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn prize_door(&self) -> Option<Door> {
        self.prize_door
    }

    pub fn selected_door(&self) -> Option<Door> {
        self.selected_door
    }

    pub fn revealed_door(&self) -> Option<Door> {
        self.revealed_door
    }

    pub fn final_choice(&self) -> Option<Door> {
        self.result.map(|result| result.final_door)
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn did_switch(&self) -> Option<bool> {
        self.result
            .map(|result| matches!(result.decision, Decision::Switch))
    }

    pub fn is_winner(&self) -> Option<bool> {
        self.result.map(|result| result.is_winner)
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Places the prize behind a uniformly random door and clears every pick.
    /// Allowed in any phase; this is also "play again".
    pub fn start_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let prize_door = rng.pick_index(DOOR_COUNT.into()) as Door;

        self.prize_door = Some(prize_door);
        self.selected_door = None;
        self.revealed_door = None;
        self.result = None;
        self.phase = RoundPhase::FirstChoicePending;
        log::debug!("monty hall: new round");
    }

    /// Records the contestant's first pick and has the host open a goat door.
    /// Returns the revealed door.
    pub fn choose_first_door<R: RandomSource + ?Sized>(
        &mut self,
        door: Door,
        rng: &mut R,
    ) -> Result<Door> {
        self.check_phase(RoundPhase::FirstChoicePending, "choose a first door")?;
        if door >= DOOR_COUNT {
            return Err(IllegalMove::UnknownDoor.into());
        }
        let prize_door = self
            .prize_door
            .ok_or_else(|| self.invalid_state("choose a first door"))?;

        // two candidates when the pick is the prize, otherwise exactly one
        let candidates: Vec<Door> = self
            .doors()
            .filter(|&candidate| candidate != door && candidate != prize_door)
            .collect();
        let pick = rng.pick_index(candidates.len());
        let revealed_door = match candidates.get(pick) {
            Some(&door) => door,
            None => {
                log::warn!("random pick {} out of range, revealing the first goat", pick);
                candidates[0]
            }
        };

        self.selected_door = Some(door);
        self.revealed_door = Some(revealed_door);
        self.phase = RoundPhase::Revealed;
        log::debug!("monty hall: picked {}, host opened {}", door, revealed_door);
        Ok(revealed_door)
    }

    pub fn choose_final_door(&mut self, decision: Decision) -> Result<RoundResult> {
        self.check_phase(RoundPhase::Revealed, "choose a final door")?;
        let (Some(selected), Some(revealed), Some(prize_door)) =
            (self.selected_door, self.revealed_door, self.prize_door)
        else {
            return Err(self.invalid_state("choose a final door"));
        };

        let final_door = match decision {
            Decision::Stay => selected,
            Decision::Switch => self
                .doors()
                .find(|&door| door != selected && door != revealed)
                .unwrap_or_else(|| {
                    log::warn!(
                        "No door left to switch to from {} (revealed {}), keeping the selected door",
                        selected,
                        revealed
                    );
                    selected
                }),
        };

        let result = RoundResult {
            decision,
            final_door,
            prize_door,
            is_winner: final_door == prize_door,
        };
        self.stats.record(decision, result.is_winner);
        self.result = Some(result);
        self.phase = RoundPhase::Resolved;
        log::debug!("monty hall: {:?} -> {:?}", decision, result);
        Ok(result)
    }

    fn check_phase(&self, expected: RoundPhase, operation: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.invalid_state(operation))
        }
    }

    fn invalid_state(&self, operation: &'static str) -> GameError {
        GameError::InvalidState {
            operation,
            phase: self.phase.describe(),
        }
    }
}
