pub mod api;
pub mod config;
pub mod pages;
pub mod title;

use dioxus::prelude::*;
use pages::{AppLayout, CounterDemo, Gallery};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Gallery {},
    #[route("/counter")]
    CounterDemo {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
