//! oneM2M content instance (`m2m:cin`) representation.
//!
//! A content instance is one unit of data written to a container. The
//! platform expects it wrapped under the `m2m:cin` key:
//!
//! ```json
//! { "m2m:cin": { "con": "<payload>" } }
//! ```

use serde::Serialize;

/// `Content-Type` sent when creating a content instance (`ty=4` is the
/// oneM2M resource type code of a content instance).
pub const CREATE_CONTENT_TYPE: &str = "application/json;ty=4";

/// The body of a content instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentInstance {
    /// Content carried by the instance, as a string.
    pub con: String,
}

/// Wire envelope: `{ "m2m:cin": { "con": … } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentInstanceEnvelope {
    #[serde(rename = "m2m:cin")]
    pub cin: ContentInstance,
}

impl ContentInstanceEnvelope {
    /// Wrap a content string.
    pub fn new(con: impl Into<String>) -> Self {
        Self {
            cin: ContentInstance { con: con.into() },
        }
    }

    /// The carried content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.cin.con
    }
}
