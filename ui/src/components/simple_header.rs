use dioxus::prelude::*;

use super::LocaleSwitcher;
use crate::core::content::NAV_LINKS;
use crate::i18n::tr;

const LOGO_SVG: Asset = asset!("/assets/images/logo.svg");

/// Compact header used around the secondary pages: logo, brand name, route links.
#[component]
pub fn SimpleHeader() -> Element {
    let _locale = super::use_locale();

    rsx! {
        header { class: "simple-header",
            div { class: "container simple-header__inner",
                Link { class: "simple-header__brand", to: "/",
                    img { class: "simple-header__logo", src: LOGO_SVG, alt: crate::t!("brand-logo-alt") }
                    span { class: "simple-header__name", {crate::t!("brand-name")} }
                }
                nav { class: "simple-header__nav", aria_label: crate::t!("nav-primary-label"),
                    ul { class: "simple-header__links",
                        for link in NAV_LINKS {
                            li { key: "{link.route}",
                                Link { class: "simple-header__link", to: link.route, {tr(link.label)} }
                            }
                        }
                    }
                }
                LocaleSwitcher {}
            }
        }
    }
}
