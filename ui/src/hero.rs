use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container",
                div { class: "hero__content",
                    h1 { class: "hero__title", {crate::t!("hero-title")} }
                    p { class: "hero__subtitle", {crate::t!("hero-subtitle")} }
                    div { class: "hero__actions",
                        a { class: "button button--light", href: "#features",
                            {crate::t!("hero-cta-explore")}
                        }
                        a { class: "button button--outline", href: "#demo",
                            {crate::t!("hero-cta-demo")}
                        }
                    }
                }
            }
        }
    }
}
