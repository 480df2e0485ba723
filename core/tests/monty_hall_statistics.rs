use arcade_core::*;

const ROUNDS: u32 = 10_000;
const TOLERANCE: f64 = 0.03;

fn run(strategy: Strategy, seed: u64) -> SessionStats {
    let mut engine = MontyHall::new();
    simulate(&mut engine, strategy, ROUNDS, &mut seeded_rng(seed)).unwrap()
}

#[test]
fn always_switch_wins_about_two_thirds() {
    let stats = run(Strategy::AlwaysSwitch, 0x5eed);

    assert_eq!(stats.switch_attempts(), ROUNDS);
    assert_eq!(stats.stay_attempts(), 0);
    assert!(
        (stats.switch_win_rate() - 2.0 / 3.0).abs() < TOLERANCE,
        "switch win rate {}",
        stats.switch_win_rate()
    );
}

#[test]
fn always_stay_wins_about_one_third() {
    let stats = run(Strategy::AlwaysStay, 0xd00d);

    assert_eq!(stats.stay_attempts(), ROUNDS);
    assert!(
        (stats.stay_win_rate() - 1.0 / 3.0).abs() < TOLERANCE,
        "stay win rate {}",
        stats.stay_win_rate()
    );
}

#[test]
fn random_strategy_shows_both_rates() {
    let stats = run(Strategy::Random, 42);

    assert_eq!(stats.games_played(), ROUNDS);
    assert!(stats.switch_win_rate() > stats.stay_win_rate());
    assert!((stats.switch_win_rate() - 2.0 / 3.0).abs() < 2.0 * TOLERANCE);
    assert!((stats.stay_win_rate() - 1.0 / 3.0).abs() < 2.0 * TOLERANCE);
}

#[test]
fn ticked_auto_play_matches_reveal_invariant() {
    let mut rng = seeded_rng(77);
    let mut engine = MontyHall::new();
    let mut auto = AutoPlay::new();
    let mut handle = auto.engage(
        Strategy::AlwaysSwitch,
        AutoPlaySpeed::VeryFast,
        &mut engine,
        &mut rng,
    );

    for _ in 0..3_000 {
        let TickOutcome::Stepped { step, next, .. } =
            auto.tick(handle, &mut engine, &mut rng).unwrap()
        else {
            panic!("handle went stale while auto-play was running");
        };
        if let AutoStep::ChoseFirstDoor { door, revealed } = step {
            assert_ne!(revealed, door);
            assert_ne!(Some(revealed), engine.prize_door());
        }
        if let AutoStep::Resolved(result) = step {
            assert_eq!(
                result.is_winner,
                engine.selected_door() != Some(result.prize_door)
            );
        }
        handle = next;
    }

    assert_eq!(engine.stats().games_played(), 1_000);
}
