use arcade_core as game;
use game::{AutoPlaySpeed, Decision, Door, RoundPhase, Strategy, TickHandle, TickOutcome};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MontyHallProps {
    pub seed: u64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NewRound,
    PickDoor(Door),
    Decide(Decision),
    SetMode(Option<Strategy>),
    SetSpeed(AutoPlaySpeed),
    AutoTick(TickHandle),
}

const fn strategy_label(strategy: Option<Strategy>) -> &'static str {
    match strategy {
        None => "Manual",
        Some(Strategy::AlwaysStay) => "Always stay",
        Some(Strategy::AlwaysSwitch) => "Always switch",
        Some(Strategy::Random) => "Random",
    }
}

const fn speed_label(speed: AutoPlaySpeed) -> &'static str {
    match speed {
        AutoPlaySpeed::Slow => "Slow",
        AutoPlaySpeed::Normal => "Normal",
        AutoPlaySpeed::Fast => "Fast",
        AutoPlaySpeed::VeryFast => "Very fast",
    }
}

fn status_message(engine: &game::MontyHall) -> String {
    match (engine.phase(), engine.result()) {
        (RoundPhase::NotStarted, _) => "Welcome to the Monty Hall game!".to_string(),
        (RoundPhase::FirstChoicePending, _) => "Pick a door!".to_string(),
        (RoundPhase::Revealed, _) => match engine.revealed_door() {
            Some(door) => format!("Door {} hides a goat. Do you want to switch?", door + 1),
            None => "Do you want to switch?".to_string(),
        },
        (RoundPhase::Resolved, Some(result)) if result.is_winner => {
            "Congratulations! You won the car!".to_string()
        }
        (RoundPhase::Resolved, Some(result)) => {
            format!("Too bad! The car was behind door {}.", result.prize_door + 1)
        }
        (RoundPhase::Resolved, None) => String::new(),
    }
}

/// Highlight class for a door; `None` keeps the plain door look.
fn door_class(engine: &game::MontyHall, door: Door) -> Option<&'static str> {
    engine.selected_door()?;

    if let Some(result) = engine.result() {
        if door == result.prize_door {
            return Some("prize");
        }
        if door == result.final_door {
            return Some("lost");
        }
    }

    if Some(door) == engine.selected_door() {
        Some("selected")
    } else if Some(door) == engine.revealed_door() {
        Some("revealed")
    } else {
        None
    }
}

fn is_door_open(engine: &game::MontyHall, door: Door) -> bool {
    engine.phase() == RoundPhase::Resolved || Some(door) == engine.revealed_door()
}

pub(crate) struct MontyHallView {
    engine: game::MontyHall,
    rng: game::SmallRng,
    auto: game::AutoPlay,
    speed: AutoPlaySpeed,
    pending: Option<Timeout>,
}

impl MontyHallView {
    fn schedule(&mut self, ctx: &Context<Self>, handle: TickHandle, delay_ms: u32) {
        let link = ctx.link().clone();
        // replacing the previous timeout drops it, which cancels it
        self.pending = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::AutoTick(handle))
        }));
    }

    fn stop_auto_play(&mut self) {
        self.pending.take();
        self.auto.cancel();
    }

    fn is_manual(&self) -> bool {
        !self.auto.is_active()
    }

    fn log_outcome(result: game::Result<impl core::fmt::Debug>) -> bool {
        match result {
            Ok(outcome) => {
                log::debug!("monty hall: {:?}", outcome);
                true
            }
            Err(err) => {
                log::debug!("monty hall rejected: {}", err);
                false
            }
        }
    }

    fn view_stats(&self) -> Html {
        let stats = self.engine.stats();
        let switch_rate = game::format_percent(stats.switch_win_rate());
        let stay_rate = game::format_percent(stats.stay_win_rate());

        html! {
            <aside class="stats">
                <p>{format!("Games played: {}", stats.games_played())}</p>
                <p>{format!("Win rate when switching: {}% ({}/{})", switch_rate, stats.switch_wins(), stats.switch_attempts())}</p>
                <p>{format!("Win rate when staying: {}% ({}/{})", stay_rate, stats.stay_wins(), stats.stay_attempts())}</p>
            </aside>
        }
    }

    fn view_auto_play(&self, ctx: &Context<Self>) -> Html {
        let modes = [None]
            .into_iter()
            .chain(Strategy::ALL.into_iter().map(Some));
        let current_speed = self.speed;

        html! {
            <fieldset class="auto-play">
                <legend>{"Auto play"}</legend>
                {
                    for modes.map(|mode| {
                        let onclick = ctx.link().callback(move |_| Msg::SetMode(mode));
                        let class = classes!((self.auto.strategy() == mode).then_some("active"));
                        html! { <button {class} {onclick}>{strategy_label(mode)}</button> }
                    })
                }
                <span class="speed">
                    {
                        for AutoPlaySpeed::ALL.into_iter().map(|speed| {
                            let onclick = ctx.link().callback(move |_| Msg::SetSpeed(speed));
                            let class = classes!((current_speed == speed).then_some("active"));
                            html! { <button {class} {onclick}>{speed_label(speed)}</button> }
                        })
                    }
                </span>
            </fieldset>
        }
    }
}

impl Component for MontyHallView {
    type Message = Msg;
    type Properties = MontyHallProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut rng = game::seeded_rng(ctx.props().seed);
        let mut engine = game::MontyHall::new();
        engine.start_round(&mut rng);

        Self {
            engine,
            rng,
            auto: game::AutoPlay::new(),
            speed: AutoPlaySpeed::default(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewRound if self.is_manual() => {
                self.engine.start_round(&mut self.rng);
                true
            }
            PickDoor(door) if self.is_manual() => {
                Self::log_outcome(self.engine.choose_first_door(door, &mut self.rng))
            }
            Decide(decision) if self.is_manual() => {
                Self::log_outcome(self.engine.choose_final_door(decision))
            }
            NewRound | PickDoor(_) | Decide(_) => false,
            SetMode(None) => {
                self.stop_auto_play();
                true
            }
            SetMode(Some(strategy)) => {
                self.pending.take();
                let handle = self
                    .auto
                    .engage(strategy, self.speed, &mut self.engine, &mut self.rng);
                self.schedule(ctx, handle, self.speed.delay_ms());
                true
            }
            SetSpeed(speed) => {
                self.speed = speed;
                self.auto.set_speed(speed);
                true
            }
            AutoTick(handle) => match self.auto.tick(handle, &mut self.engine, &mut self.rng) {
                Ok(TickOutcome::Stepped { next, delay_ms, .. }) => {
                    self.schedule(ctx, next, delay_ms);
                    true
                }
                Ok(TickOutcome::Stale) => false,
                Err(err) => {
                    log::error!("auto-play stopped: {}", err);
                    self.stop_auto_play();
                    true
                }
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.stop_auto_play();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let engine = &self.engine;
        let manual = self.is_manual();
        let can_pick = manual && engine.phase() == RoundPhase::FirstChoicePending;

        html! {
            <section class="monty-hall">
                <p class="message">{status_message(engine)}</p>
                <div class="doors">
                    {
                        for engine.doors().map(|door| {
                            let onclick = ctx.link().callback(move |_| PickDoor(door));
                            let open = is_door_open(engine, door);
                            let class = classes!("door", door_class(engine, door), open.then_some("open"));
                            let behind = match (open, engine.prize_door() == Some(door)) {
                                (false, _) => "",
                                (true, true) => "🚗",
                                (true, false) => "🐐",
                            };
                            html! {
                                <button {class} {onclick} disabled={!can_pick}>
                                    <span class="number">{(door + 1).to_string()}</span>
                                    <span class="behind">{behind}</span>
                                </button>
                            }
                        })
                    }
                </div>
                if manual && engine.phase() == RoundPhase::Revealed {
                    <div class="decision">
                        <button onclick={ctx.link().callback(|_| Decide(Decision::Stay))}>{"Stay"}</button>
                        <button onclick={ctx.link().callback(|_| Decide(Decision::Switch))}>{"Switch"}</button>
                    </div>
                }
                if manual && engine.phase() == RoundPhase::Resolved {
                    <div class="result">
                        if let (Some(switched), Some(won)) = (engine.did_switch(), engine.is_winner()) {
                            <p>
                                {format!(
                                    "You {} and {}!",
                                    if switched { "switched" } else { "stayed" },
                                    if won { "won" } else { "lost" },
                                )}
                            </p>
                        }
                        <button onclick={ctx.link().callback(|_| NewRound)}>{"Play again"}</button>
                    </div>
                }
                {self.view_stats()}
                {self.view_auto_play(ctx)}
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::FixedSequence;

    fn revealed_round() -> game::MontyHall {
        // prize behind door 2, player picks door 0, host must open door 1
        let mut rng = FixedSequence::new([2, 0]);
        let mut engine = game::MontyHall::new();
        engine.start_round(&mut rng);
        engine.choose_first_door(0, &mut rng).unwrap();
        engine
    }

    #[test]
    fn messages_follow_round_phase() {
        let mut engine = game::MontyHall::new();
        assert_eq!(status_message(&engine), "Welcome to the Monty Hall game!");

        engine.start_round(&mut FixedSequence::new([2]));
        assert_eq!(status_message(&engine), "Pick a door!");

        let mut engine = revealed_round();
        assert_eq!(
            status_message(&engine),
            "Door 2 hides a goat. Do you want to switch?"
        );

        engine.choose_final_door(Decision::Stay).unwrap();
        assert_eq!(
            status_message(&engine),
            "Too bad! The car was behind door 3."
        );
    }

    #[test]
    fn door_classes_mark_selection_and_outcome() {
        let mut engine = revealed_round();
        assert_eq!(door_class(&engine, 0), Some("selected"));
        assert_eq!(door_class(&engine, 1), Some("revealed"));
        assert_eq!(door_class(&engine, 2), None);
        assert!(is_door_open(&engine, 1));
        assert!(!is_door_open(&engine, 2));

        engine.choose_final_door(Decision::Stay).unwrap();
        assert_eq!(door_class(&engine, 2), Some("prize"));
        assert_eq!(door_class(&engine, 0), Some("lost"));
        assert!(is_door_open(&engine, 0));
    }

    #[test]
    fn no_highlight_before_first_pick() {
        let mut engine = game::MontyHall::new();
        engine.start_round(&mut FixedSequence::new([1]));

        assert!(engine.doors().all(|door| door_class(&engine, door).is_none()));
    }
}
