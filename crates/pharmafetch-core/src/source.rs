//! Remote literature database seam

use crate::record::PaperRecord;

/// Search and fetch operations against a remote literature database.
///
/// Implementations block the calling thread until the remote call completes.
/// Transport and protocol failures are returned as errors; callers do not retry.
pub trait MetadataSource {
    /// Identifiers of papers matching `query`, at most `max_results`.
    ///
    /// An empty list means no matches, not a failure.
    fn search(&self, query: &str, max_results: usize) -> anyhow::Result<Vec<String>>;

    /// Bibliographic records for `ids`, fetched in one batched request.
    ///
    /// An empty `ids` slice returns an empty list without a remote call.
    fn fetch_details(&self, ids: &[String]) -> anyhow::Result<Vec<PaperRecord>>;
}
