//! Shared UI components

pub mod button;
pub mod cast_gallery;
pub mod cast_thumbnail;
pub mod counter_button;
pub mod helpers;
pub mod icons;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use cast_gallery::CastGalleryView;
pub use cast_thumbnail::CastThumbnail;
pub use counter_button::CounterButtonView;
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{ImageIcon, LoaderIcon, RefreshIcon};
