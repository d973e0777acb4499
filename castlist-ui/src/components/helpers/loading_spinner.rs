//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Spinning loader with a status message, announced politely to screen readers
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center gap-4 py-12 text-gray-300",
            role: "status",
            aria_live: "polite",
            "data-testid": "loading-spinner",
            LoaderIcon { class: "w-12 h-12 animate-spin text-blue-500" }
            p { "{message}" }
        }
    }
}
