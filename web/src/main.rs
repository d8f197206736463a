use dioxus::prelude::*;

use ui::components::{use_locale_provider, SimpleFooter, SimpleHeader};
use ui::views::{Features, Info, Landing, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[layout(WebShell)]
        #[route("/features")]
        Features {},
        #[route("/:slug")]
        Info { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let lang_code = use_locale_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Keyed on the language so a locale switch remounts the routed tree with fresh strings.
        div {
            key: "{lang_code()}",
            class: "app-root",
            Router::<Route> {}
        }
    }
}

/// Simple header/footer pair around the secondary pages.
#[component]
fn WebShell() -> Element {
    rsx! {
        div { class: "page",
            SimpleHeader {}
            Outlet::<Route> {}
            SimpleFooter {}
        }
    }
}
