//! NCBI E-utilities client (esearch + efetch)

use anyhow::{Context, Result};
use pharmafetch_core::http::{self, HttpError};
use pharmafetch_core::{MetadataSource, PaperRecord};
use serde::Deserialize;

use crate::config::Config;
use crate::parser::parse_pubmed_xml;
use crate::transform::to_record;

const DATABASE: &str = "pubmed";

/// esearch JSON envelope
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    esearchresult: SearchResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResult {
    idlist: Vec<String>,
    #[serde(rename = "ERROR")]
    error: Option<String>,
}

/// Blocking PubMed client over the E-utilities HTTP API
#[derive(Debug, Clone)]
pub struct EutilsClient {
    config: Config,
}

impl EutilsClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Credential and identification parameters sent with every request
    fn common_params(&self) -> Vec<(&str, &str)> {
        let mut params = Vec::with_capacity(3);
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.as_str()));
        }
        if let Some(tool) = &self.config.tool {
            params.push(("tool", tool.as_str()));
        }
        if let Some(email) = &self.config.email {
            params.push(("email", email.as_str()));
        }
        params
    }

    /// PubMed IDs matching `query`, at most `max_results`
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let retmax = max_results.to_string();
        let mut params = vec![
            ("db", DATABASE),
            ("term", query),
            ("retmode", "json"),
            ("retmax", retmax.as_str()),
        ];
        params.extend(self.common_params());

        let body = http::get_text(&self.config.endpoint("esearch.fcgi"), &params)
            .map_err(|e| request_error("esearch", e))?;
        let ids = parse_search_response(&body)?;

        log::debug!("Found {} papers for query: {}", ids.len(), query);
        Ok(ids)
    }

    /// Records for `pmids`, fetched in a single efetch request.
    ///
    /// No request is made for an empty slice.
    pub fn fetch_details(&self, pmids: &[String]) -> Result<Vec<PaperRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        // POST keeps long id lists out of the URL
        let ids = pmids.join(",");
        let mut form = vec![("db", DATABASE), ("id", ids.as_str()), ("retmode", "xml")];
        form.extend(self.common_params());

        let body = http::post_form_text(&self.config.endpoint("efetch.fcgi"), &form)
            .map_err(|e| request_error("efetch", e))?;
        let articles = parse_pubmed_xml(&body).context("Failed to parse efetch response")?;

        log::debug!(
            "Parsed {} articles for {} requested ids",
            articles.len(),
            pmids.len()
        );
        Ok(articles.into_iter().map(to_record).collect())
    }
}

impl MetadataSource for EutilsClient {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        EutilsClient::search(self, query, max_results)
    }

    fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        EutilsClient::fetch_details(self, ids)
    }
}

/// Extract the id list; an `ERROR` without ids is a failed search.
fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let response: SearchResponse =
        serde_json::from_str(body).context("Invalid esearch JSON response")?;
    let result = response.esearchresult;
    if let Some(error) = result.error {
        anyhow::ensure!(!result.idlist.is_empty(), "esearch error: {error}");
        log::warn!("esearch reported: {error}");
    }
    Ok(result.idlist)
}

fn request_error(endpoint: &str, e: HttpError) -> anyhow::Error {
    let hint = if e.is_rate_limited() {
        " (rate limited; an NCBI API key raises the limit)"
    } else {
        ""
    };
    anyhow::Error::new(e).context(format!("PubMed {endpoint} request failed{hint}"))
}
