//! Display types for UI components
//!
//! These mirror the records in `cast.json`, keeping only what the gallery
//! renders.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Directory holding the thumbnail SVGs, relative to the page.
pub const THUMBNAIL_DIR: &str = "images";

/// Opaque cast member identifier.
///
/// `cast.json` may use strings or integers for ids; both are kept in their
/// string form so they can be used as render keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CastId(String);

impl CastId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CastId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CastIdVisitor;

        impl Visitor<'_> for CastIdVisitor {
            type Value = CastId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CastId, E> {
                Ok(CastId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CastId, E> {
                Ok(CastId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CastId, E> {
                Ok(CastId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CastId, E> {
                Ok(CastId(v.to_string()))
            }
        }

        deserializer.deserialize_any(CastIdVisitor)
    }
}

/// One entry of the cast list
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: CastId,
    pub name: String,
    pub slug: String,
}

impl CastMember {
    /// Path of the member's thumbnail, `images/{slug}_tn.svg`.
    pub fn thumbnail_path(&self) -> String {
        format!("{THUMBNAIL_DIR}/{}_tn.svg", self.slug)
    }
}
