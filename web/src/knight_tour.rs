use arcade_core as game;
use chrono::prelude::*;
use game::{Coord, Coord2, GameError, IllegalMove, TourState};
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::utils::{format_clock, utc_now};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    ClickCell(Coord2),
    Hint,
    Undo,
    Restart,
    SetSize(Coord),
    UpdateTime,
}

/// Engine plus the wall-clock bookkeeping the view shows next to it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TourSession {
    pub engine: game::KnightTour,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl TourSession {
    fn new(engine: game::KnightTour) -> Self {
        Self {
            engine,
            started_at: None,
            ended_at: None,
        }
    }

    fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            let secs = (self.ended_at.unwrap_or(now) - started_at).num_seconds();
            u32::try_from(secs.max(0)).unwrap_or(u32::MAX)
        } else {
            0
        }
    }

    fn click(&mut self, coords: Coord2, now: DateTime<Utc>) -> game::Result<game::MoveOutcome> {
        let outcome = match self.engine.state() {
            TourState::NotStarted => {
                let outcome = self.engine.start(coords)?;
                self.started_at = Some(now);
                outcome
            }
            _ => self.engine.move_to(coords)?,
        };

        if self.engine.state() == TourState::Completed && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
        Ok(outcome)
    }

    /// Warnsdorff hint; a dead end abandons the attempt.
    fn hint(&mut self) -> game::Result<Coord2> {
        match self.engine.suggest_next_move() {
            Err(GameError::NoMovesAvailable) => {
                self.restart(None)?;
                Err(GameError::NoMovesAvailable)
            }
            other => other,
        }
    }

    fn restart(&mut self, new_size: Option<Coord>) -> game::Result<()> {
        if self.engine.state() == TourState::InProgress {
            if new_size.is_some() {
                return Err(GameError::InvalidState {
                    operation: "change the board size",
                    phase: "a tour is in progress",
                });
            }
            self.engine.abandon()?;
        } else {
            self.engine.reset(new_size)?;
        }
        self.started_at = None;
        self.ended_at = None;
        Ok(())
    }
}

const fn square_shade(coords: Coord2) -> &'static str {
    if coords.0 % 2 == coords.1 % 2 { "light" } else { "dark" }
}

const fn feedback(err: GameError) -> &'static str {
    match err {
        GameError::IllegalMove(IllegalMove::NotKnightMove) => "Knights move in an L shape.",
        GameError::IllegalMove(IllegalMove::AlreadyVisited) => "That square was already visited.",
        GameError::NoMovesAvailable => "No moves left, the tour was reset.",
        _ => "That move is not allowed.",
    }
}

pub(crate) struct KnightTourView {
    session: TourSession,
    hint: Option<Coord2>,
    notice: Option<&'static str>,
    prev_time: u32,
    _timer_interval: Interval,
}

impl KnightTourView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(500, move || link.send_message(Msg::UpdateTime))
    }

    fn cell_classes(&self, coords: Coord2, reachable: &[Coord2]) -> Classes {
        let engine = &self.session.engine;
        classes!(
            "square",
            square_shade(coords),
            (engine.current_position() == Some(coords)).then_some("current"),
            engine.is_visited(coords).then_some("visited"),
            (self.hint == Some(coords)).then_some("hint"),
            reachable.contains(&coords).then_some("reachable")
        )
    }
}

impl Component for KnightTourView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: TourSession::new(game::KnightTour::default()),
            hint: None,
            notice: None,
            prev_time: 0,
            _timer_interval: KnightTourView::create_timer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let result = match msg {
            ClickCell(coords) => self.session.click(coords, utc_now()).map(|outcome| {
                log::debug!("knight tour: {:?} at {:?}", outcome, coords);
            }),
            Hint => self.session.hint().map(|hint| {
                self.hint = Some(hint);
            }),
            Undo => self.session.engine.undo().map(|_| ()),
            Restart => self.session.restart(None),
            SetSize(size) => self.session.restart(Some(size)),
            UpdateTime => {
                let time = self.session.elapsed_secs(utc_now());
                if self.prev_time != time {
                    self.prev_time = time;
                    return true;
                }
                return false;
            }
        };

        match result {
            Ok(()) => {
                if !matches!(msg, Hint) {
                    self.hint = None;
                }
                self.notice = None;
            }
            Err(err) => {
                log::debug!("knight tour rejected {:?}: {}", msg, err);
                self.notice = Some(feedback(err));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let engine = &self.session.engine;
        let size = engine.size();
        let in_progress = engine.state() == TourState::InProgress;
        let reachable = engine
            .current_position()
            .filter(|_| in_progress)
            .map(|current| engine.reachable_moves(current))
            .unwrap_or_default();
        let elapsed = format_clock(self.session.elapsed_secs(utc_now()));

        html! {
            <section class="knight-tour">
                <div class="sizes">
                    {
                        for game::BOARD_SIZES.into_iter().map(|option| {
                            let onclick = ctx.link().callback(move |_| SetSize(option));
                            let class = classes!((option == size).then_some("active"));
                            html! {
                                <button {class} {onclick} disabled={in_progress}>
                                    {format!("{option}x{option}")}
                                </button>
                            }
                        })
                    }
                </div>
                <p class="counters">
                    <span>{format!("Moves: {}/{}", engine.visited_count(), engine.total_cells())}</span>
                    <span>{format!("Time: {}", elapsed)}</span>
                </p>
                if engine.state() == TourState::Completed {
                    <p class="complete">{format!("Tour complete in {}!", elapsed)}</p>
                }
                if let Some(notice) = self.notice {
                    <p class="notice">{notice}</p>
                }
                <table class="chessboard">
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let coords = (row, col);
                                        let onclick = ctx.link().callback(move |_| ClickCell(coords));
                                        let order = engine
                                            .visit_order(coords)
                                            .map(|order| order.to_string())
                                            .unwrap_or_default();
                                        html! {
                                            <td class={self.cell_classes(coords, &reachable)} {onclick}>
                                                {order}
                                            </td>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <div class="controls">
                    <button onclick={ctx.link().callback(|_| Hint)} disabled={!in_progress}>{"Hint"}</button>
                    <button onclick={ctx.link().callback(|_| Undo)} disabled={!in_progress}>{"Undo"}</button>
                    <button onclick={ctx.link().callback(|_| Restart)}>{"Restart"}</button>
                </div>
            </section>
        }
    }
}
