use dioxus::prelude::*;

use crate::components::FeatureGrid;

#[component]
pub fn Features() -> Element {
    let _locale = crate::components::use_locale();

    rsx! {
        section { class: "page page-features",
            div { class: "container",
                h1 { class: "page__title", {crate::t!("features-heading")} }
                p { class: "page__intro", {crate::t!("features-intro")} }
                FeatureGrid {}
            }
        }
    }
}
