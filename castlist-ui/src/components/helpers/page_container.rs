//! Page container component

use dioxus::prelude::*;

/// Main content area below the nav. Pages stack their sections inside it.
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        main { class: "container mx-auto p-6 flex flex-col gap-4", {children} }
    }
}
