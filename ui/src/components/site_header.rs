use dioxus::prelude::*;

use super::{Icon, LocaleSwitcher};
use crate::core::content::NAV_LINKS;
use crate::core::menu::MenuState;
use crate::i18n::tr;

/// Sticky header of the single-page layout.
///
/// Owns the mobile menu flag; nothing outside this component can see it.
#[component]
pub fn SiteHeader() -> Element {
    let mut menu = use_signal(MenuState::closed);
    let ontoggle = use_callback(move |_: ()| menu.with_mut(MenuState::toggle));
    #[cfg(test)]
    tests::capture_toggle(ontoggle);

    rsx! {
        SiteHeaderBar { menu: menu(), ontoggle }
    }
}

/// Stateless markup for [`SiteHeader`]; the menu panel is present iff `menu` is open.
#[component]
pub fn SiteHeaderBar(menu: MenuState, ontoggle: EventHandler<()>) -> Element {
    let _locale = super::use_locale();
    let toggle_label = tr(menu.toggle_label_key());

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner container",
                div { class: "site-header__bar",
                    a { class: "site-header__brand", href: "/",
                        span { class: "site-header__badge", {crate::t!("brand-badge")} }
                        span { class: "site-header__name", {crate::t!("brand-name")} }
                    }

                    nav {
                        class: "site-header__nav",
                        aria_label: crate::t!("nav-primary-label"),
                        ul { class: "site-header__links",
                            for link in NAV_LINKS.iter() {
                                li { key: "{link.anchor}",
                                    a { class: "site-header__link", href: link.anchor, {tr(link.label)} }
                                }
                            }
                        }
                    }

                    LocaleSwitcher {}

                    button {
                        r#type: "button",
                        class: "site-header__toggle",
                        aria_expanded: menu.aria_expanded(),
                        aria_controls: "site-header-menu",
                        aria_label: "{toggle_label}",
                        onclick: move |_| ontoggle.call(()),
                        Icon { kind: menu.toggle_icon() }
                    }
                }

                if menu.is_open() {
                    MobileMenu {}
                }
            }
        }
    }
}

/// Narrow-viewport link list, mirroring the desktop navigation.
#[component]
pub fn MobileMenu() -> Element {
    rsx! {
        div { id: "site-header-menu", class: "site-header__menu",
            ul { class: "site-header__menu-links",
                for link in NAV_LINKS.iter() {
                    li { key: "{link.anchor}",
                        a { class: "site-header__menu-link", href: link.anchor, {tr(link.label)} }
                    }
                }
            }
        }
    }
}
