use dioxus::prelude::*;

use super::Icon;
use crate::core::content::{IconKind, PROMO_IMAGE_SRC, PROMO_POINTS};
use crate::i18n::tr;

/// Mobile app panel: placeholder screenshot on one side, pitch and download button on the other.
#[component]
pub fn AppPromo() -> Element {
    rsx! {
        section { id: "demo", class: "section",
            div { class: "container",
                div { class: "app-promo",
                    div { class: "app-promo__media",
                        img {
                            class: "app-promo__image",
                            src: PROMO_IMAGE_SRC,
                            alt: crate::t!("promo-image-alt"),
                        }
                        span { class: "app-promo__badge", {crate::t!("promo-badge")} }
                    }
                    div { class: "app-promo__copy",
                        h2 { class: "app-promo__title", {crate::t!("promo-title")} }
                        p { class: "app-promo__body", {crate::t!("promo-body")} }
                        ul { class: "app-promo__points",
                            for point in PROMO_POINTS {
                                li { key: "{point}", class: "app-promo__point",
                                    span { class: "app-promo__bullet" }
                                    {tr(point)}
                                }
                            }
                        }
                        button { r#type: "button", class: "button button--primary app-promo__download",
                            Icon { kind: IconKind::Download, class: "icon--small" }
                            {crate::t!("promo-download")}
                        }
                    }
                }
            }
        }
    }
}
