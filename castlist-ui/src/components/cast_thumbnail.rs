//! Cast thumbnail - pure view with a selection callback

use crate::components::ChromelessButton;
use crate::display_types::CastMember;
use dioxus::prelude::*;

/// A clickable thumbnail for one cast member.
///
/// The member name doubles as the hover tooltip and the image alt text.
#[component]
pub fn CastThumbnail(
    member: CastMember,
    // Called with the member when the thumbnail is clicked, if provided
    #[props(default)] on_select: Option<EventHandler<CastMember>>,
) -> Element {
    let src = member.thumbnail_path();
    let name = member.name.clone();

    rsx! {
        li { class: "list-none",
            ChromelessButton {
                class: Some(
                    "block w-full bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl hover:ring-2 hover:ring-indigo-500 transition-shadow cursor-pointer"
                        .to_string(),
                ),
                title: Some(name.clone()),
                test_id: Some("cast-thumbnail"),
                onclick: move |_| {
                    if let Some(handler) = on_select {
                        handler.call(member.clone());
                    }
                },
                img {
                    class: "w-full aspect-square object-cover bg-gray-700",
                    src: "{src}",
                    alt: "{name}",
                }
            }
        }
    }
}
