use serde::{Deserialize, Serialize};

use super::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    AlwaysSwitch,
    AlwaysStay,
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::AlwaysStay, Self::AlwaysSwitch, Self::Random];

    pub fn decide<R: RandomSource + ?Sized>(self, rng: &mut R) -> Decision {
        match self {
            Self::AlwaysSwitch => Decision::Switch,
            Self::AlwaysStay => Decision::Stay,
            Self::Random if rng.flip_coin() => Decision::Switch,
            Self::Random => Decision::Stay,
        }
    }
}

/// Delay between auto-play steps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoPlaySpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl AutoPlaySpeed {
    pub const ALL: [AutoPlaySpeed; 4] = [Self::Slow, Self::Normal, Self::Fast, Self::VeryFast];

    pub const fn delay_ms(self) -> u32 {
        match self {
            Self::Slow => 2000,
            Self::Normal => 1000,
            Self::Fast => 500,
            Self::VeryFast => 200,
        }
    }
}

/// Token for one scheduled auto-play step. It goes stale as soon as the mode
/// changes or the driver is cancelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickHandle {
    generation: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoStep {
    StartedRound,
    ChoseFirstDoor { door: Door, revealed: Door },
    Resolved(RoundResult),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Stale,
    Stepped {
        step: AutoStep,
        next: TickHandle,
        delay_ms: u32,
    },
}

/// Drives a [`MontyHall`] engine through rounds without user input, one step
/// per tick, using the same public operations a player would.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoPlay {
    active: Option<(Strategy, AutoPlaySpeed)>,
    generation: u64,
}

impl AutoPlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.active.map(|(strategy, _)| strategy)
    }

    pub fn speed(&self) -> Option<AutoPlaySpeed> {
        self.active.map(|(_, speed)| speed)
    }

    pub fn is_current(&self, handle: TickHandle) -> bool {
        self.active.is_some() && handle.generation == self.generation
    }

    /// Switches auto-play on (or to a new strategy) and starts a fresh round
    /// right away. Every handle issued before is invalidated.
    pub fn engage<R: RandomSource + ?Sized>(
        &mut self,
        strategy: Strategy,
        speed: AutoPlaySpeed,
        engine: &mut MontyHall,
        rng: &mut R,
    ) -> TickHandle {
        self.invalidate();
        self.active = Some((strategy, speed));
        engine.start_round(rng);
        log::debug!("auto-play engaged: {:?} every {} ms", strategy, speed.delay_ms());
        self.current_handle()
    }

    /// Takes effect from the next scheduled step; outstanding handles stay valid.
    pub fn set_speed(&mut self, speed: AutoPlaySpeed) {
        if let Some((_, current)) = self.active.as_mut() {
            *current = speed;
        }
    }

    /// Turns auto-play off. Also the teardown path for a closing view.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::debug!("auto-play cancelled");
        }
        self.invalidate();
    }

    /// Runs exactly one round step if `handle` is still current.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        handle: TickHandle,
        engine: &mut MontyHall,
        rng: &mut R,
    ) -> Result<TickOutcome> {
        let Some((strategy, speed)) = self.active.filter(|_| self.is_current(handle)) else {
            log::trace!("dropping stale auto-play tick {:?}", handle);
            return Ok(TickOutcome::Stale);
        };

        let step = match engine.phase() {
            RoundPhase::NotStarted | RoundPhase::Resolved => {
                engine.start_round(rng);
                AutoStep::StartedRound
            }
            RoundPhase::FirstChoicePending => {
                let door = rng.pick_index(DOOR_COUNT.into()) as Door;
                let revealed = engine.choose_first_door(door, rng)?;
                AutoStep::ChoseFirstDoor { door, revealed }
            }
            RoundPhase::Revealed => {
                let result = engine.choose_final_door(strategy.decide(rng))?;
                AutoStep::Resolved(result)
            }
        };
        log::trace!("auto-play step: {:?}", step);

        self.invalidate();
        Ok(TickOutcome::Stepped {
            step,
            next: self.current_handle(),
            delay_ms: speed.delay_ms(),
        })
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn current_handle(&self) -> TickHandle {
        TickHandle {
            generation: self.generation,
        }
    }
}

/// Plays `rounds` complete rounds back to back under `strategy` and returns
/// the engine's session statistics afterwards.
pub fn simulate<R: RandomSource + ?Sized>(
    engine: &mut MontyHall,
    strategy: Strategy,
    rounds: u32,
    rng: &mut R,
) -> Result<SessionStats> {
    for _ in 0..rounds {
        engine.start_round(rng);
        let door = rng.pick_index(DOOR_COUNT.into()) as Door;
        engine.choose_first_door(door, rng)?;
        engine.choose_final_door(strategy.decide(rng))?;
    }
    Ok(*engine.stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(outcome: TickOutcome) -> (AutoStep, TickHandle) {
        match outcome {
            TickOutcome::Stepped { step, next, .. } => (step, next),
            TickOutcome::Stale => panic!("tick unexpectedly stale"),
        }
    }

    #[test]
    fn engage_starts_round_and_ticks_cycle_through_phases() {
        // prize 1, first pick 0, reveal among one candidate, then next prize 2
        let mut rng = FixedSequence::new([1, 0, 0, 2]);
        let mut engine = MontyHall::new();
        let mut auto = AutoPlay::new();

        let handle = auto.engage(Strategy::AlwaysSwitch, AutoPlaySpeed::Fast, &mut engine, &mut rng);
        assert_eq!(engine.phase(), RoundPhase::FirstChoicePending);

        let (step, handle) = stepped(auto.tick(handle, &mut engine, &mut rng).unwrap());
        assert_eq!(step, AutoStep::ChoseFirstDoor { door: 0, revealed: 2 });

        let (step, handle) = stepped(auto.tick(handle, &mut engine, &mut rng).unwrap());
        let AutoStep::Resolved(result) = step else {
            panic!("expected a resolved round, got {:?}", step);
        };
        assert_eq!(result.decision, Decision::Switch);
        assert_eq!(result.final_door, 1);
        assert!(result.is_winner);

        let (step, _) = stepped(auto.tick(handle, &mut engine, &mut rng).unwrap());
        assert_eq!(step, AutoStep::StartedRound);
        assert_eq!(engine.prize_door(), Some(2));
        assert_eq!(engine.stats().switch_wins(), 1);
    }

    #[test]
    fn tick_reports_configured_delay() {
        let mut rng = seeded_rng(3);
        let mut engine = MontyHall::new();
        let mut auto = AutoPlay::new();

        let handle = auto.engage(Strategy::AlwaysStay, AutoPlaySpeed::Slow, &mut engine, &mut rng);
        auto.set_speed(AutoPlaySpeed::VeryFast);
        assert_eq!(auto.speed(), Some(AutoPlaySpeed::VeryFast));

        match auto.tick(handle, &mut engine, &mut rng).unwrap() {
            TickOutcome::Stepped { delay_ms, .. } => assert_eq!(delay_ms, 200),
            TickOutcome::Stale => panic!("tick unexpectedly stale"),
        }
    }

    #[test]
    fn cancelled_handle_never_mutates_engine() {
        let mut rng = seeded_rng(5);
        let mut engine = MontyHall::new();
        let mut auto = AutoPlay::new();

        let handle = auto.engage(Strategy::Random, AutoPlaySpeed::Normal, &mut engine, &mut rng);
        auto.cancel();
        let before = engine.clone();

        assert_eq!(
            auto.tick(handle, &mut engine, &mut rng).unwrap(),
            TickOutcome::Stale
        );
        assert_eq!(engine, before);
        assert!(!auto.is_active());
    }

    #[test]
    fn mode_change_invalidates_pending_handle() {
        let mut rng = seeded_rng(9);
        let mut engine = MontyHall::new();
        let mut auto = AutoPlay::new();

        let old = auto.engage(Strategy::AlwaysStay, AutoPlaySpeed::Normal, &mut engine, &mut rng);
        let new = auto.engage(Strategy::AlwaysSwitch, AutoPlaySpeed::Normal, &mut engine, &mut rng);

        assert!(!auto.is_current(old));
        assert!(auto.is_current(new));
        assert_eq!(
            auto.tick(old, &mut engine, &mut rng).unwrap(),
            TickOutcome::Stale
        );
        assert_eq!(auto.strategy(), Some(Strategy::AlwaysSwitch));
    }

    #[test]
    fn consumed_handle_cannot_be_replayed() {
        let mut rng = seeded_rng(1);
        let mut engine = MontyHall::new();
        let mut auto = AutoPlay::new();

        let handle = auto.engage(Strategy::AlwaysStay, AutoPlaySpeed::Normal, &mut engine, &mut rng);
        let (_, next) = stepped(auto.tick(handle, &mut engine, &mut rng).unwrap());

        assert_eq!(
            auto.tick(handle, &mut engine, &mut rng).unwrap(),
            TickOutcome::Stale
        );
        assert!(auto.is_current(next));
    }

    #[test]
    fn random_strategy_follows_coin() {
        let mut rng = FixedSequence::new([0, 1]);

        assert_eq!(Strategy::Random.decide(&mut rng), Decision::Switch);
        assert_eq!(Strategy::Random.decide(&mut rng), Decision::Stay);
    }

    #[test]
    fn simulate_counts_every_round() {
        let mut engine = MontyHall::new();
        let stats = simulate(&mut engine, Strategy::Random, 300, &mut seeded_rng(21)).unwrap();

        assert_eq!(stats.games_played(), 300);
        assert_eq!(stats.switch_attempts() + stats.stay_attempts(), 300);
        assert_eq!(engine.phase(), RoundPhase::Resolved);
    }
}
