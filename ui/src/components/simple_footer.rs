use dioxus::prelude::*;

use crate::core::content::{SIMPLE_COPYRIGHT_YEAR, SIMPLE_FOOTER_LINKS};
use crate::i18n::tr;

#[component]
pub fn SimpleFooter() -> Element {
    let _locale = super::use_locale();

    rsx! {
        footer { class: "simple-footer",
            div { class: "container simple-footer__inner",
                p { class: "simple-footer__copyright",
                    {crate::t!("footer-copyright", year = SIMPLE_COPYRIGHT_YEAR)}
                }
                nav { class: "simple-footer__nav",
                    ul { class: "simple-footer__links",
                        for link in SIMPLE_FOOTER_LINKS {
                            li { key: "{link.route}",
                                Link { class: "simple-footer__link", to: link.route, {tr(link.label)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
