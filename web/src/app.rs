use yew::prelude::*;

use crate::gomoku::GomokuView;
use crate::knight_tour::KnightTourView;
use crate::monty_hall::MontyHallView;
use crate::utils::js_random_seed;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum GameTab {
    #[default]
    MontyHall,
    Omok,
    KnightTour,
}

impl GameTab {
    const ALL: [GameTab; 3] = [Self::MontyHall, Self::Omok, Self::KnightTour];

    const fn title(self) -> &'static str {
        match self {
            Self::MontyHall => "Monty Hall",
            Self::Omok => "Omok",
            Self::KnightTour => "Knight's Tour",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) enum Msg {
    Select(GameTab),
}

/// Hosts one game view at a time. Switching tabs unmounts the previous view,
/// which drops its engine and cancels anything it had scheduled.
#[derive(Debug)]
pub(crate) struct App {
    tab: GameTab,
    seed: u64,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            tab: GameTab::default(),
            seed: ctx.props().seed.unwrap_or_else(js_random_seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(tab) if tab != self.tab => {
                log::debug!("switching to {:?}", tab);
                self.tab = tab;
                true
            }
            Msg::Select(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let seed = self.seed;

        html! {
            <div class="arcade">
                <nav>
                    {
                        for GameTab::ALL.into_iter().map(|tab| {
                            let onclick = ctx.link().callback(move |_| Msg::Select(tab));
                            let class = classes!((tab == self.tab).then_some("active"));
                            html! { <button {class} {onclick}>{tab.title()}</button> }
                        })
                    }
                </nav>
                {
                    match self.tab {
                        GameTab::MontyHall => html! { <MontyHallView {seed}/> },
                        GameTab::Omok => html! { <GomokuView/> },
                        GameTab::KnightTour => html! { <KnightTourView/> },
                    }
                }
            </div>
        }
    }
}
