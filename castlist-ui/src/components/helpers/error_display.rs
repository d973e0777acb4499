//! Error display component

use dioxus::prelude::*;

/// Error box with the failure message and optional extra content (e.g. a retry button)
#[component]
pub fn ErrorDisplay(message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4 flex items-center justify-between gap-4",
            role: "alert",
            "data-testid": "error-display",
            p { "{message}" }
            {children}
        }
    }
}
