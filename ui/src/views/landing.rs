use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{AppPromo, FeaturesSection, SiteFooter, SiteHeader, Strategy};
use crate::Hero;

/// The full single-page layout: header, hero, features, app promo, strategy, footer.
#[component]
pub fn Landing() -> Element {
    let locale = crate::components::use_locale();
    debug!(%locale, "landing render");

    rsx! {
        div { class: "page page-landing",
            SiteHeader {}
            main { class: "page-landing__main",
                Hero {}
                FeaturesSection {}
                AppPromo {}
                Strategy {}
            }
            SiteFooter {}
        }
    }
}
