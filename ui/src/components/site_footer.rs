use dioxus::prelude::*;

use crate::core::content::{
    CONTACT_EMAIL, CONTACT_PHONE, LEGAL_LINKS, NAV_LINKS, SITE_COPYRIGHT_YEAR,
};
use crate::i18n::tr;

/// Four-column footer of the single-page layout.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container site-footer__inner",
                div { class: "site-footer__columns",
                    div { id: "about", class: "site-footer__column",
                        h3 { class: "site-footer__heading", {crate::t!("footer-about-heading")} }
                        p { class: "site-footer__text", {crate::t!("footer-about-body")} }
                    }
                    div { class: "site-footer__column",
                        h3 { class: "site-footer__heading", {crate::t!("footer-links-heading")} }
                        ul { class: "site-footer__list",
                            for link in NAV_LINKS {
                                li { key: "{link.anchor}",
                                    a { class: "site-footer__link", href: link.anchor, {tr(link.label)} }
                                }
                            }
                        }
                    }
                    div { class: "site-footer__column",
                        h3 { class: "site-footer__heading", {crate::t!("footer-legal-heading")} }
                        ul { class: "site-footer__list",
                            for link in LEGAL_LINKS {
                                li { key: "{link.route}",
                                    Link { class: "site-footer__link", to: link.route, {tr(link.label)} }
                                }
                            }
                        }
                    }
                    div { id: "contact", class: "site-footer__column",
                        h3 { class: "site-footer__heading", {crate::t!("footer-contact-heading")} }
                        ul { class: "site-footer__list",
                            li { class: "site-footer__text",
                                a { class: "site-footer__link", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                            }
                            li { class: "site-footer__text", "{CONTACT_PHONE}" }
                        }
                    }
                }
                div { class: "site-footer__legal",
                    p { {crate::t!("footer-copyright", year = SITE_COPYRIGHT_YEAR)} }
                }
            }
        }
    }
}
