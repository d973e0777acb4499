//! Document title access
//!
//! The title is read once, before the counter ever writes to it, and that
//! value stays the baseline for the rest of the session.

use castlist_common::LabelSink;
use std::sync::OnceLock;
use tracing::{debug, warn};

static BASELINE: OnceLock<String> = OnceLock::new();

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// The baseline title. The first call reads the document title; every later
/// call returns that same value.
pub fn capture_baseline() -> &'static str {
    BASELINE.get_or_init(|| document().map(|d| d.title()).unwrap_or_default())
}

/// Writes labels into the document title.
pub struct DocumentTitle;

impl LabelSink for DocumentTitle {
    fn set_label(&mut self, label: &str) {
        match document() {
            Some(doc) => {
                debug!("Setting document title to {label:?}");
                doc.set_title(label);
            }
            None => warn!("No document available, title not updated"),
        }
    }
}
