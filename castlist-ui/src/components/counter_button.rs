//! Counter button - pure view

use crate::components::{Button, ButtonSize, ButtonVariant};
use castlist_common::counter_label;
use dioxus::prelude::*;

/// Button showing how many times it has been clicked
#[component]
pub fn CounterButtonView(count: u32, on_activate: EventHandler<()>) -> Element {
    let label = counter_label(count);

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            test_id: Some("counter-button"),
            onclick: move |_| on_activate.call(()),
            "{label}"
        }
    }
}
