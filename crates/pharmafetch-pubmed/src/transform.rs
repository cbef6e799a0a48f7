//! Transform parsed PubMed articles into paper records

use std::sync::LazyLock;

use pharmafetch_core::PaperRecord;
use regex::Regex;

use crate::parser::{Author, PubmedArticle};

/// Email-shaped substring
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("invalid email regex")
});

/// Build a [`PaperRecord`] from a parsed article.
///
/// Names and affiliations are appended only when non-empty, so the two lists
/// stay positionally paired only when the source is complete.
pub fn to_record(article: PubmedArticle) -> PaperRecord {
    let publication_date = publication_date(&article);

    let mut authors = Vec::with_capacity(article.authors.len());
    let mut affiliations = Vec::with_capacity(article.authors.len());
    let mut corresponding_emails = Vec::new();

    for author in &article.authors {
        let name = full_name(author);
        if !name.is_empty() {
            authors.push(name);
        }

        let affiliation = author.affiliations.first().map_or("", String::as_str);
        if !affiliation.is_empty() {
            affiliations.push(affiliation.to_string());
        }

        if author.is_corresponding {
            if let Some(email) = extract_email(affiliation) {
                corresponding_emails.push(email.to_string());
            }
        }
    }

    PaperRecord {
        pmid: article.pmid,
        title: article.title.unwrap_or_default(),
        publication_date,
        authors,
        affiliations,
        corresponding_emails,
        industry: None,
    }
}

/// `"{ForeName} {LastName}"`, trimmed
fn full_name(author: &Author) -> String {
    let fore = author.fore_name.as_deref().unwrap_or("");
    let last = author.last_name.as_deref().unwrap_or("");
    format!("{fore} {last}").trim().to_string()
}

/// First email-shaped substring of `text`
pub fn extract_email(text: &str) -> Option<&str> {
    if !text.contains('@') {
        return None;
    }
    EMAIL.find(text).map(|m| m.as_str())
}

/// `YYYY-MM-DD` from the journal issue date, empty components omitted.
///
/// Textual and numeric months and numeric days become two digits; anything
/// else passes through. Without a Year, a MedlineDate's leading year is used.
pub fn publication_date(article: &PubmedArticle) -> String {
    let year = article
        .pub_year
        .clone()
        .or_else(|| article.medline_date.as_deref().and_then(leading_year))
        .unwrap_or_default();
    let month = article
        .pub_month
        .as_deref()
        .map(normalize_month)
        .unwrap_or_default();
    let day = article
        .pub_day
        .as_deref()
        .map(normalize_day)
        .unwrap_or_default();

    [year, month, day]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn leading_year(medline_date: &str) -> Option<String> {
    let year = medline_date.get(..4)?;
    year.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| year.to_string())
}

fn parse_month(s: &str) -> Option<u32> {
    // Handle both numeric and text months
    match s.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => match s.to_lowercase().get(..3)? {
            "jan" => Some(1),
            "feb" => Some(2),
            "mar" => Some(3),
            "apr" => Some(4),
            "may" => Some(5),
            "jun" => Some(6),
            "jul" => Some(7),
            "aug" => Some(8),
            "sep" => Some(9),
            "oct" => Some(10),
            "nov" => Some(11),
            "dec" => Some(12),
            _ => None,
        },
    }
}

fn normalize_month(s: &str) -> String {
    match parse_month(s) {
        Some(n) => format!("{n:02}"),
        None => s.to_string(),
    }
}

fn normalize_day(s: &str) -> String {
    match s.parse::<u32>() {
        Ok(n) => format!("{n:02}"),
        Err(_) => s.to_string(),
    }
}
