//! Cast gallery view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<GalleryState>` and reads the fields through lenses. The
//! branch priority comes from `GalleryBranch::select`, which is unit tested in
//! castlist-common.

use crate::components::cast_thumbnail::CastThumbnail;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::{ImageIcon, LoaderIcon, RefreshIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::CastMember;
use crate::stores::gallery::{GalleryState, GalleryStateStoreExt};
use castlist_common::GalleryBranch;
use dioxus::prelude::*;

/// Cast gallery view
#[component]
pub fn CastGalleryView(
    state: ReadStore<GalleryState>,
    // Starts a refresh; used by both the retry and the refresh control
    on_refresh: EventHandler<()>,
    // Called with the member whose thumbnail was clicked
    #[props(default)] on_select: Option<EventHandler<CastMember>>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let members = state.members().read().clone();
    let branch = GalleryBranch::select(loading, error.is_some(), members.is_empty());

    let body = match (branch, error) {
        (GalleryBranch::Placeholder, _) => rsx! {
            LoadingSpinner { message: "Loading cast...".to_string() }
        },
        (GalleryBranch::Error, Some(message)) => rsx! {
            ErrorDisplay { message,
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    test_id: Some("retry-button"),
                    onclick: move |_| on_refresh.call(()),
                    "Retry"
                }
            }
        },
        _ if members.is_empty() => rsx! {
            RefreshBar { refreshing: loading, on_refresh }
            EmptyGallery {}
        },
        _ => rsx! {
            RefreshBar { refreshing: loading, on_refresh }
            CastGrid { members, on_select }
        },
    };

    rsx! {
        section { class: "flex flex-col gap-4", "data-testid": "cast-gallery", {body} }
    }
}

#[component]
fn RefreshBar(refreshing: bool, on_refresh: EventHandler<()>) -> Element {
    rsx! {
        div { class: "flex justify-end",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Small,
                disabled: refreshing,
                busy: refreshing,
                test_id: Some("refresh-button"),
                onclick: move |_| on_refresh.call(()),
                if refreshing {
                    LoaderIcon { class: "w-4 h-4 animate-spin" }
                    "Refreshing..."
                } else {
                    RefreshIcon {}
                    "Refresh"
                }
            }
        }
    }
}

#[component]
fn CastGrid(
    members: Vec<CastMember>,
    #[props(default)] on_select: Option<EventHandler<CastMember>>,
) -> Element {
    rsx! {
        ul { class: "grid grid-cols-2 sm:grid-cols-4 lg:grid-cols-6 gap-4",
            for member in members {
                CastThumbnail { key: "{member.id}", member, on_select }
            }
        }
    }
}

#[component]
fn EmptyGallery() -> Element {
    rsx! {
        div { class: "text-center py-12 text-gray-400",
            ImageIcon { class: "w-16 h-16 mx-auto mb-4" }
            p { "No cast members yet." }
        }
    }
}
