//! Pharmafetch Affiliation - academic vs. industry author classification
//!
//! Keyword-driven classification of free-text affiliations, and the paper
//! filter that keeps papers with at least one industry-affiliated author.
//!
//! # Example
//!
//! ```
//! use pharmafetch_affiliation::classify;
//!
//! let c = classify("Pfizer Inc, New York, NY");
//! assert!(!c.is_academic);
//! assert_eq!(c.companies, vec!["pfizer"]);
//! ```

pub mod classify;
pub mod filter;
pub mod keywords;

// Re-exports
pub use classify::{Classification, classify, extract_company_names};
pub use filter::{filter_papers, industry_affiliation};
