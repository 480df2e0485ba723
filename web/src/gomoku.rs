use arcade_core as game;
use game::{Coord2, GomokuStatus, Stone};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Place(Coord2),
    Restart,
}

const fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
    }
}

fn status_text(engine: &game::Gomoku) -> String {
    match engine.status() {
        GomokuStatus::InProgress => format!("Current turn: {}", stone_name(engine.current_player())),
        GomokuStatus::Won(stone) => format!("{} wins!", stone_name(stone)),
        GomokuStatus::Draw => "The board is full, it's a draw!".to_string(),
    }
}

fn cell_classes(engine: &game::Gomoku, coords: Coord2) -> Classes {
    classes!(
        "cell",
        match engine.cell_at(coords) {
            Some(Stone::Black) => Some("black"),
            Some(Stone::White) => Some("white"),
            None => None,
        },
        (engine.last_placement() == Some(coords)).then_some("last")
    )
}

#[derive(Debug, Default)]
pub(crate) struct GomokuView {
    engine: game::Gomoku,
}

impl Component for GomokuView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Place(coords) => match self.engine.place(coords) {
                Ok(outcome) => {
                    log::debug!("omok: {:?} at {:?}", outcome, coords);
                    true
                }
                Err(err) => {
                    log::debug!("omok rejected {:?}: {}", coords, err);
                    false
                }
            },
            Msg::Restart => {
                self.engine.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = &self.engine;
        let size = engine.size();
        let board_class = classes!("omok", (!engine.is_finished()).then_some("playable"));

        html! {
            <section class="omok-game">
                <h2>{status_text(engine)}</h2>
                <table class={board_class}>
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let coords = (row, col);
                                        let onclick = ctx.link().callback(move |_| Msg::Place(coords));
                                        html! { <td class={cell_classes(engine, coords)} {onclick}/> }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <button onclick={ctx.link().callback(|_| Msg::Restart)}>{"Restart game"}</button>
            </section>
        }
    }
}
