//! Pharmafetch Core - shared plumbing for the affiliation report pipeline
//!
//! Paper records, the metadata-source seam, blocking HTTP over a shared
//! client, logging, progress output and the CSV report sink.

pub mod http;
pub mod logging;
pub mod progress;
pub mod record;
pub mod sink;
pub mod source;

// Re-exports for convenience
pub use http::{HttpConfig, HttpError, SHARED_RUNTIME, http_client, set_http_config};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::ProgressContext;
pub use record::{IndustryAffiliation, PaperRecord};
pub use sink::{write_csv, write_report};
pub use source::MetadataSource;
