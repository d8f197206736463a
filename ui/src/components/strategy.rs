use dioxus::prelude::*;

use crate::core::content::{StrategyPhase, STRATEGY_PHASES};
use crate::i18n::tr;

#[component]
pub fn Strategy() -> Element {
    rsx! {
        section { class: "section section--muted",
            div { class: "container container--narrow",
                h2 { class: "section__title", {crate::t!("strategy-heading")} }
                div { class: "strategy",
                    for phase in STRATEGY_PHASES {
                        {render_phase(phase)}
                    }
                }
            }
        }
    }
}

fn render_phase(phase: StrategyPhase) -> Element {
    rsx! {
        div { key: "{phase.title}", class: "strategy__phase",
            h3 { class: "strategy__phase-title", {tr(phase.title)} }
            ol { class: "strategy__steps",
                for (number, step) in phase.numbered_steps() {
                    li { key: "{number}", class: "strategy__step",
                        span { class: "strategy__step-number", "{number}" }
                        p { class: "strategy__step-text", {tr(step)} }
                    }
                }
            }
        }
    }
}
