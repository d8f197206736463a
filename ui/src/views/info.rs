use dioxus::prelude::*;

use crate::core::content::find_info_page;
use crate::i18n::tr;

/// Secondary page looked up by its route slug (`/terms`, `/pricing`, ...).
#[component]
pub fn Info(slug: String) -> Element {
    let _locale = crate::components::use_locale();

    let Some(page) = find_info_page(&slug) else {
        return rsx! { NotFoundPanel {} };
    };

    rsx! {
        section { class: "page page-info",
            div { class: "container container--narrow",
                h1 { class: "page__title", {tr(page.title)} }
                p { class: "page__intro", {tr(page.body)} }
                Link { class: "page__back", to: "/", {crate::t!("page-back-home")} }
            }
        }
    }
}

/// Catch-all for paths with more than one segment.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _locale = crate::components::use_locale();
    dioxus::logger::tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! { NotFoundPanel {} }
}

#[component]
fn NotFoundPanel() -> Element {
    rsx! {
        section { class: "page page-not-found",
            div { class: "container container--narrow",
                h1 { class: "page__title", {crate::t!("page-not-found-title")} }
                p { class: "page__intro", {crate::t!("page-not-found-body")} }
                Link { class: "page__back", to: "/", {crate::t!("page-back-home")} }
            }
        }
    }
}
