//! Search, fetch, filter and report for a single query

use std::path::Path;

use anyhow::{Context, Result};
use pharmafetch_core::{MetadataSource, ProgressContext, write_report};

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Searching,
    Fetching,
    Filtering,
    Reporting,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Searching => "search",
            Self::Fetching => "fetch",
            Self::Filtering => "filter",
            Self::Reporting => "report",
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The search returned no identifiers
    NoMatches,
    /// Identifiers were found but no records could be parsed
    NoRecords,
    /// No paper had an industry-affiliated author
    NoIndustryPapers,
    /// This many papers were written to the report
    Reported(usize),
}

/// Run the pipeline for `query` against `source`.
///
/// Empty results at any stage end the run early with an informational
/// message; errors from the source or the sink are returned as-is.
pub fn run<S>(
    source: &S,
    query: &str,
    max_results: usize,
    destination: Option<&Path>,
    progress: &ProgressContext,
) -> Result<Outcome>
where
    S: MetadataSource + ?Sized,
{
    log::debug!("Stage: {}", Stage::Searching.label());
    progress.println(format!("Searching PubMed for: {query}"));
    let pb = progress.stage(Stage::Searching.label(), query);
    let ids = source.search(query, max_results);
    pb.finish_and_clear();
    let ids = ids.context("Search failed")?;

    if ids.is_empty() {
        progress.println("No papers found matching the query.");
        return Ok(Outcome::NoMatches);
    }

    log::debug!("Stage: {}", Stage::Fetching.label());
    progress.println(format!("Found {} papers. Fetching details...", ids.len()));
    let pb = progress.stage(
        Stage::Fetching.label(),
        format!("{} records", ids.len()),
    );
    let papers = source.fetch_details(&ids);
    pb.finish_and_clear();
    let papers = papers.context("Fetching paper details failed")?;

    if papers.is_empty() {
        progress.println("Failed to fetch paper details.");
        return Ok(Outcome::NoRecords);
    }

    log::debug!("Stage: {}", Stage::Filtering.label());
    progress.println("Filtering papers with pharmaceutical/biotech company affiliations...");
    let fetched = papers.len();
    let filtered = pharmafetch_affiliation::filter_papers(papers);
    log::debug!("{} of {} papers retained", filtered.len(), fetched);

    if filtered.is_empty() {
        progress.println("No papers with pharmaceutical/biotech company affiliations found.");
        return Ok(Outcome::NoIndustryPapers);
    }

    log::debug!("Stage: {}", Stage::Reporting.label());
    progress.println(format!(
        "Found {} papers with company affiliations.",
        filtered.len()
    ));
    write_report(&filtered, destination)?;

    Ok(Outcome::Reported(filtered.len()))
}
