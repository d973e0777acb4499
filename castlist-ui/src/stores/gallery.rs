//! Gallery state store

use crate::display_types::CastMember;
use castlist_common::{RefreshSequence, RefreshTicket, Settle};
use dioxus::prelude::*;
use tracing::debug;

/// State for the cast gallery
#[derive(Clone, Debug, PartialEq, Store)]
pub struct GalleryState {
    /// Result of the last successful refresh, in source order
    pub members: Vec<CastMember>,
    /// Whether the latest refresh is still in flight
    pub loading: bool,
    /// Error message from the latest refresh, if it failed
    pub error: Option<String>,
    /// Orders overlapping refreshes
    pub sequence: RefreshSequence,
}

impl Default for GalleryState {
    /// Starts out loading so the first render shows the placeholder rather
    /// than an empty grid.
    fn default() -> Self {
        Self {
            members: Vec::new(),
            loading: true,
            error: None,
            sequence: RefreshSequence::new(),
        }
    }
}

impl GalleryState {
    /// Start a refresh. Any earlier refresh still in flight is superseded.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.loading = true;
        self.error = None;
        self.sequence.begin()
    }

    /// Apply the outcome of the refresh identified by `ticket`.
    ///
    /// Success replaces the members wholesale; failure records the message and
    /// leaves the members alone. Outcomes of superseded refreshes are dropped.
    /// Returns whether the outcome was applied.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<Vec<CastMember>, String>,
    ) -> bool {
        if self.sequence.settle(ticket) == Settle::Stale {
            debug!("Dropping result of superseded refresh #{}", ticket.id());
            return false;
        }

        match outcome {
            Ok(members) => self.members = members,
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::CastId;
    use castlist_common::GalleryBranch;

    fn branch(state: &GalleryState) -> GalleryBranch {
        GalleryBranch::select(state.loading, state.error.is_some(), state.members.is_empty())
    }

    fn member(id: &str) -> CastMember {
        CastMember {
            id: CastId::new(id),
            name: format!("Member {id}"),
            slug: format!("member-{id}"),
        }
    }

    fn ids(state: &GalleryState) -> Vec<&str> {
        state.members.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn starts_on_placeholder() {
        let state = GalleryState::default();
        assert!(state.loading);
        assert_eq!(branch(&state), GalleryBranch::Placeholder);
    }

    #[test]
    fn success_fills_grid_in_order() {
        let mut state = GalleryState::default();
        let ticket = state.begin_refresh();
        assert!(state.finish_refresh(ticket, Ok(vec![member("3"), member("1"), member("2")])));

        assert!(!state.loading);
        assert_eq!(ids(&state), vec!["3", "1", "2"]);
        assert_eq!(branch(&state), GalleryBranch::Grid { refreshing: false });
    }

    #[test]
    fn failure_keeps_previous_members() {
        let mut state = GalleryState::default();
        let ticket = state.begin_refresh();
        state.finish_refresh(ticket, Ok(vec![member("1")]));

        let ticket = state.begin_refresh();
        state.finish_refresh(ticket, Err("Failed to load cast list (HTTP 404)".to_string()));

        assert!(!state.loading);
        assert!(state.error.as_deref().unwrap().contains("404"));
        assert_eq!(ids(&state), vec!["1"]);
        assert_eq!(branch(&state), GalleryBranch::Error);
    }

    #[test]
    fn retry_goes_straight_to_grid() {
        let mut state = GalleryState::default();
        let ticket = state.begin_refresh();
        state.finish_refresh(ticket, Err("Parse error: expected value".to_string()));
        assert_eq!(branch(&state), GalleryBranch::Error);

        let ticket = state.begin_refresh();
        assert_eq!(state.error, None);
        assert_eq!(branch(&state), GalleryBranch::Placeholder);

        state.finish_refresh(ticket, Ok(vec![member("1"), member("2")]));
        assert_eq!(branch(&state), GalleryBranch::Grid { refreshing: false });
        assert_eq!(state.members.len(), 2);
    }

    #[test]
    fn refresh_while_loaded_keeps_grid_visible() {
        let mut state = GalleryState::default();
        let ticket = state.begin_refresh();
        state.finish_refresh(ticket, Ok(vec![member("1")]));

        state.begin_refresh();
        assert!(state.loading);
        assert_eq!(branch(&state), GalleryBranch::Grid { refreshing: true });
        assert_eq!(ids(&state), vec!["1"]);
    }

    #[test]
    fn superseded_refresh_is_ignored() {
        let mut state = GalleryState::default();
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        assert!(state.finish_refresh(second, Ok(vec![member("new")])));
        assert!(!state.finish_refresh(first, Err("Network error: offline".to_string())));

        assert_eq!(state.error, None);
        assert_eq!(ids(&state), vec!["new"]);
        assert!(!state.loading);
    }

    #[test]
    fn early_stale_completion_keeps_loading() {
        let mut state = GalleryState::default();
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        assert!(!state.finish_refresh(first, Ok(vec![member("old")])));
        assert!(state.loading);
        assert!(state.members.is_empty());

        state.finish_refresh(second, Ok(vec![member("new")]));
        assert!(!state.loading);
        assert_eq!(ids(&state), vec!["new"]);
    }
}
