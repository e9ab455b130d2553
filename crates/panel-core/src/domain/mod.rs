//! Domain model (request ids, loosely-typed records, status documents, ...).

pub mod badge;
pub mod ids;
pub mod record;
pub mod response;
pub mod timestamp;

pub use badge::Tone;
pub use ids::RequestId;
pub use record::{Record, text_of};
pub use response::StatusResponse;
pub use timestamp::{TIMESTAMP_FIELDS, epoch_millis, parse_epoch_millis, timestamp_text};
