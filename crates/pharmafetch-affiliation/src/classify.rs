//! Academic vs. industry classification of a single affiliation string

use crate::keywords::{ACADEMIC_KEYWORDS, KNOWN_COMPANIES, PHARMA_KEYWORDS, contains_any};

/// Outcome of classifying one affiliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_academic: bool,
    /// Candidate company names, in discovery order
    pub companies: Vec<String>,
}

impl Classification {
    /// Academic (or undecided), no companies
    pub fn academic() -> Self {
        Self {
            is_academic: true,
            companies: Vec::new(),
        }
    }

    fn industry(companies: Vec<String>) -> Self {
        Self {
            is_academic: false,
            companies,
        }
    }

    /// Non-academic with at least one company name
    pub fn is_industry(&self) -> bool {
        !self.is_academic && !self.companies.is_empty()
    }
}

/// Classify an affiliation as academic or industry.
///
/// Rules, first match wins:
/// 1. academic term, no known company, no pharma term → academic
/// 2. known company or pharma term → industry; companies are the known names
///    found, else names pulled out by [`extract_company_names`]
/// 3. no signal → academic
pub fn classify(affiliation: &str) -> Classification {
    if affiliation.is_empty() {
        return Classification::academic();
    }

    let lowered = affiliation.to_lowercase();
    let has_academic = contains_any(&lowered, ACADEMIC_KEYWORDS);
    let known: Vec<String> = KNOWN_COMPANIES
        .iter()
        .filter(|name| lowered.contains(*name))
        .map(|name| (*name).to_string())
        .collect();
    let has_pharma = contains_any(&lowered, PHARMA_KEYWORDS);

    if has_academic && known.is_empty() && !has_pharma {
        return Classification::academic();
    }

    if !known.is_empty() {
        return Classification::industry(known);
    }
    if has_pharma {
        return Classification::industry(extract_company_names(affiliation));
    }

    Classification::academic()
}

/// Pull company-like segments out of an affiliation.
///
/// Splits on `,` and `;`, drops segments with an academic term, and keeps
/// (trimmed, original case) those with a pharma/biotech term.
pub fn extract_company_names(affiliation: &str) -> Vec<String> {
    affiliation
        .split([',', ';'])
        .map(str::trim)
        .filter(|part| {
            let lowered = part.to_lowercase();
            !contains_any(&lowered, ACADEMIC_KEYWORDS) && contains_any(&lowered, PHARMA_KEYWORDS)
        })
        .map(String::from)
        .collect()
}
