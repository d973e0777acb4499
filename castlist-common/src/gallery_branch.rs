/// Which of the mutually exclusive gallery layouts to render.
///
/// Checked in priority order: a first load shows only the placeholder, an
/// error hides the grid, and everything else shows the grid. A refresh on
/// top of loaded data stays on the grid with the refresh control busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryBranch {
    /// Nothing loaded yet and a fetch is in flight
    Placeholder,
    /// The last refresh failed
    Error,
    /// Refresh control plus thumbnail grid
    Grid { refreshing: bool },
}

impl GalleryBranch {
    pub fn select(loading: bool, has_error: bool, is_empty: bool) -> Self {
        if loading && is_empty {
            GalleryBranch::Placeholder
        } else if has_error {
            GalleryBranch::Error
        } else {
            GalleryBranch::Grid {
                refreshing: loading,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_shows_placeholder() {
        assert_eq!(
            GalleryBranch::select(true, false, true),
            GalleryBranch::Placeholder
        );
    }

    #[test]
    fn test_placeholder_wins_over_error() {
        assert_eq!(
            GalleryBranch::select(true, true, true),
            GalleryBranch::Placeholder
        );
    }

    #[test]
    fn test_error_hides_stale_grid() {
        assert_eq!(
            GalleryBranch::select(false, true, false),
            GalleryBranch::Error
        );
    }

    #[test]
    fn test_refresh_over_loaded_data_keeps_grid() {
        assert_eq!(
            GalleryBranch::select(true, false, false),
            GalleryBranch::Grid { refreshing: true }
        );
    }

    #[test]
    fn test_settled_empty_result_is_grid() {
        assert_eq!(
            GalleryBranch::select(false, false, true),
            GalleryBranch::Grid { refreshing: false }
        );
    }
}
