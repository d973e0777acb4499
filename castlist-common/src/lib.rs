//! castlist-common - pure state logic shared by the UI and web crates
//!
//! Nothing in here touches the DOM or the network, so it all runs under
//! plain `cargo test`.

mod counter;
mod gallery_branch;
mod refresh;

pub use counter::{counter_label, CountChanged, Counter, LabelSink, TitleMirror, TITLE_SEPARATOR};
pub use gallery_branch::GalleryBranch;
pub use refresh::{RefreshSequence, RefreshTicket, Settle};
