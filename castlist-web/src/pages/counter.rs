use crate::title::{self, DocumentTitle};
use castlist_common::{Counter, TitleMirror};
use castlist_ui::CounterButtonView;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn CounterDemo() -> Element {
    let mut counter = use_signal(Counter::new);
    let mirror = use_hook(|| TitleMirror::new(title::capture_baseline()));
    let count = counter.read().count();

    rsx! {
        h1 { class: "text-3xl font-bold text-white mb-6", "Counter" }
        CounterButtonView {
            count,
            on_activate: move |_| {
                let change = counter.write().activate();
                if mirror.apply(&mut DocumentTitle, change) {
                    debug!("Mirrored count {} into the title", change.count);
                }
            },
        }
    }
}
