use crate::Route;
use castlist_ui::PageContainer;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let tab_class = |active: bool| {
        if active {
            "px-3 py-1.5 rounded-lg bg-gray-700 text-white"
        } else {
            "px-3 py-1.5 rounded-lg text-gray-400 hover:text-white"
        }
    };

    let gallery_class = tab_class(matches!(current_route, Route::Gallery {})).to_string();
    let counter_class = tab_class(matches!(current_route, Route::CounterDemo {})).to_string();

    rsx! {
        nav { class: "flex gap-2 px-6 py-3 border-b border-gray-800",
            Link {
                class: gallery_class,
                to: Route::Gallery {},
                "Cast"
            }
            Link {
                class: counter_class,
                to: Route::CounterDemo {},
                "Counter"
            }
        }
        PageContainer { Outlet::<Route> {} }
    }
}
