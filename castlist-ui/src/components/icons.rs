//! Inline SVG icons
//!
//! Path data comes from the Lucide icon set; every icon shares the same
//! 24x24 stroked frame.

use dioxus::prelude::*;

#[component]
fn IconSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

/// Eight spokes; spin it with `animate-spin`
#[component]
pub fn LoaderIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        }
    }
}

#[component]
pub fn RefreshIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

/// Picture frame, shown for an empty gallery
#[component]
pub fn ImageIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            rect {
                x: "3",
                y: "3",
                width: "18",
                height: "18",
                rx: "2",
                ry: "2",
            }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        }
    }
}
