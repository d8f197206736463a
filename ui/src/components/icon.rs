use dioxus::prelude::*;

use crate::core::content::IconKind;

/// Inline 24x24 stroke icon. Colour comes from `currentColor`, so the
/// surrounding element's class decides how it is tinted.
#[component]
pub fn Icon(kind: IconKind, #[props(default, into)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph(kind)}
        }
    }
}

fn glyph(kind: IconKind) -> Element {
    match kind {
        IconKind::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        IconKind::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        IconKind::BarChart => rsx! {
            line { x1: "12", x2: "12", y1: "20", y2: "10" }
            line { x1: "18", x2: "18", y1: "20", y2: "4" }
            line { x1: "6", x2: "6", y1: "20", y2: "16" }
        },
        IconKind::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        IconKind::Download => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", x2: "12", y1: "15", y2: "3" }
        },
        IconKind::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
