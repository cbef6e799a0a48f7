//! Pharmafetch PubMed - PubMed metadata source
//!
//! Searches PubMed and fetches article metadata through the NCBI
//! E-utilities API, turning efetch XML into [`PaperRecord`]s.
//!
//! # Features
//!
//! - esearch (JSON) for ids, efetch (XML, one batched POST) for details
//! - Streaming XML parsing with quick-xml
//! - Optional API key, `tool` and `email` identification
//!
//! # Example
//!
//! ```ignore
//! use pharmafetch_pubmed::{Config, EutilsClient};
//!
//! let client = EutilsClient::new(Config::default());
//! let ids = client.search("crispr AND 2024[dp]", 20)?;
//! let papers = client.fetch_details(&ids)?;
//! println!("Fetched {} records", papers.len());
//! ```
//!
//! [`PaperRecord`]: pharmafetch_core::PaperRecord

pub mod api;
pub mod config;
pub mod parser;
pub mod transform;

// Re-exports
pub use api::EutilsClient;
pub use config::Config;
