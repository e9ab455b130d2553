//! Status document returned by the status API.

use std::sync::OnceLock;

use serde_json::Value;

use super::record::{Record, text_of};
use crate::normalize::{chronological, coerce_records};

/// Root document returned by the status API.
///
/// The document is kept as raw JSON; every accessor reads it defensively.
/// The chronological run-event view is computed on first access and cached.
#[derive(Debug, Clone)]
pub struct StatusResponse {
    raw: Value,
    timeline: OnceLock<Vec<Record>>,
}

impl StatusResponse {
    pub fn new(raw: Value) -> Self {
        Self {
            raw,
            timeline: OnceLock::new(),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.raw.as_object().and_then(|map| map.get(name))
    }

    fn text(&self, name: &str) -> Option<String> {
        self.field(name).and_then(text_of)
    }

    /// `requestId` echoed by the remote, if any.
    pub fn request_id(&self) -> Option<String> {
        self.text("requestId")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    pub fn approval(&self) -> Option<String> {
        self.text("approval")
    }

    pub fn runs(&self) -> Vec<Record> {
        coerce_records(self.field("runs"))
    }

    pub fn approvals(&self) -> Vec<Record> {
        coerce_records(self.field("approvals"))
    }

    /// Run events in input order.
    pub fn run_events(&self) -> Vec<Record> {
        coerce_records(self.field("runEvents"))
    }

    /// Run events sorted ascending by event time (stable).
    pub fn timeline(&self) -> &[Record] {
        self.timeline
            .get_or_init(|| chronological(&self.run_events()))
    }
}

impl From<Value> for StatusResponse {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}
