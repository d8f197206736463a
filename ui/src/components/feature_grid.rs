use dioxus::prelude::*;

use super::Icon;
use crate::core::content::{FeatureDescriptor, FEATURES};
use crate::core::hover::{CardVariant, FeatureHover};
use crate::i18n::tr;

/// Pointer transition reported by a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

/// The four feature cards. Owns which card (if any) is under the pointer.
#[component]
pub fn FeatureGrid() -> Element {
    let mut hover = use_signal(FeatureHover::none);
    let onhover = use_callback(move |evt: HoverEvent| match evt {
        HoverEvent::Enter(i) => hover.with_mut(|h| h.enter(i)),
        HoverEvent::Leave(i) => hover.with_mut(|h| h.leave(i)),
    });
    #[cfg(test)]
    tests::capture_hover(onhover);

    rsx! {
        FeatureGridView { hover: hover(), onhover }
    }
}

#[component]
pub fn FeatureGridView(hover: FeatureHover, onhover: EventHandler<HoverEvent>) -> Element {
    rsx! {
        div { class: "feature-grid",
            for (index, feature) in FEATURES.iter().enumerate() {
                FeatureCard {
                    key: "{index}",
                    index: index,
                    feature: *feature,
                    variant: hover.variant(index),
                    onhover: onhover,
                }
            }
        }
    }
}

#[component]
fn FeatureCard(
    index: usize,
    feature: FeatureDescriptor,
    variant: CardVariant,
    onhover: EventHandler<HoverEvent>,
) -> Element {
    rsx! {
        div {
            class: "feature-card {variant.card_class()}",
            onmouseenter: move |_| onhover.call(HoverEvent::Enter(index)),
            onmouseleave: move |_| onhover.call(HoverEvent::Leave(index)),
            div { class: "feature-card__body",
                div { class: "feature-card__icon {variant.icon_class()}",
                    Icon { kind: feature.icon }
                }
                h3 { class: "feature-card__title", {tr(feature.title)} }
                p { class: "feature-card__description", {tr(feature.description)} }
                div { class: "feature-card__footer",
                    span { class: "feature-card__stat", {tr(feature.stat)} }
                }
            }
        }
    }
}

/// Landing-page section wrapping the grid.
#[component]
pub fn FeaturesSection() -> Element {
    let _locale = super::use_locale();

    rsx! {
        section { id: "features", class: "section section--muted",
            div { class: "container",
                h2 { class: "section__title", {crate::t!("features-heading")} }
                FeatureGrid {}
            }
        }
    }
}
