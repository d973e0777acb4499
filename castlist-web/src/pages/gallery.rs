use crate::api;
use crate::config::AppConfig;
use castlist_ui::stores::GalleryState;
use castlist_ui::{CastGalleryView, CastMember};
use dioxus::prelude::*;
use tracing::{info, warn};

#[component]
pub fn Gallery() -> Element {
    let config: AppConfig = use_context();
    let mut state = use_store(GalleryState::default);
    let mut selected = use_signal(|| None::<CastMember>);

    let mut refresh = move || {
        let ticket = state.write().begin_refresh();
        info!("Refreshing cast list (#{})", ticket.id());

        spawn(async move {
            let outcome = api::fetch_cast(config.cast_path).await;
            match &outcome {
                Ok(members) => info!("Loaded {} cast members (#{})", members.len(), ticket.id()),
                Err(e) => warn!("Cast list refresh #{} failed: {e}", ticket.id()),
            }
            state
                .write()
                .finish_refresh(ticket, outcome.map_err(|e| e.to_string()));
        });
    };

    // Initial load; runs once per mount since nothing reactive is read
    use_effect(move || refresh());

    rsx! {
        h1 { class: "text-3xl font-bold text-white mb-6", "Cast" }
        if let Some(member) = selected() {
            p { class: "text-sm text-gray-400 mb-4", "Selected: {member.name}" }
        }
        CastGalleryView {
            state,
            on_refresh: move |_| refresh(),
            on_select: move |member: CastMember| {
                info!("Selected cast member {}", member.id);
                selected.set(Some(member));
            },
        }
    }
}
