//! Paper filtering by industry affiliation

use pharmafetch_core::{IndustryAffiliation, PaperRecord};
use rustc_hash::FxHashSet;

use crate::classify::classify;

/// Industry signal gathered across all affiliations of one paper.
///
/// Company names are deduplicated on insert and kept in first-seen order.
#[derive(Debug, Default)]
struct CompanyAccumulator {
    non_academic_authors: Vec<String>,
    companies: Vec<String>,
    seen: FxHashSet<String>,
}

impl CompanyAccumulator {
    fn add_companies(&mut self, companies: Vec<String>) {
        for company in companies {
            if self.seen.insert(company.clone()) {
                self.companies.push(company);
            }
        }
    }

    fn into_industry(self, corresponding_email: &str) -> Option<IndustryAffiliation> {
        if self.non_academic_authors.is_empty() {
            return None;
        }
        Some(IndustryAffiliation {
            non_academic_authors: self.non_academic_authors,
            company_affiliations: self.companies,
            corresponding_email: corresponding_email.to_string(),
        })
    }
}

/// Classify every affiliation of `paper` and derive its industry fields.
///
/// Affiliation `i` is attributed to author `i`; an affiliation past the end of
/// the author list still contributes its companies but names no author.
/// Returns `None` when no author is industry-affiliated.
pub fn industry_affiliation(paper: &PaperRecord) -> Option<IndustryAffiliation> {
    let mut acc = CompanyAccumulator::default();

    for (idx, affiliation) in paper.affiliations.iter().enumerate() {
        let classification = classify(affiliation);
        if !classification.is_industry() {
            continue;
        }
        if let Some(author) = paper.author_at(idx) {
            acc.non_academic_authors.push(author.to_string());
        }
        acc.add_companies(classification.companies);
    }

    acc.into_industry(paper.first_corresponding_email())
}

/// Keep papers with at least one industry-affiliated author.
///
/// Retained papers get their derived fields set; relative order is preserved.
pub fn filter_papers(papers: Vec<PaperRecord>) -> Vec<PaperRecord> {
    papers
        .into_iter()
        .filter_map(|mut paper| {
            let industry = industry_affiliation(&paper)?;
            paper.industry = Some(industry);
            log::debug!("Added paper: {}", paper.title);
            Some(paper)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(pmid: &str, authors: &[&str], affiliations: &[&str]) -> PaperRecord {
        PaperRecord {
            pmid: pmid.to_string(),
            title: format!("Paper {pmid}"),
            authors: authors.iter().map(|s| s.to_string()).collect(),
            affiliations: affiliations.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn academic_only_paper_is_dropped() {
        let papers = vec![paper(
            "1",
            &["Ann Lee"],
            &["Dept. of Biology, Harvard University"],
        )];
        assert!(filter_papers(papers).is_empty());
    }

    #[test]
    fn industry_author_is_recorded() {
        let papers = vec![paper(
            "2",
            &["Ann Lee", "Bo Chen"],
            &["Dept. of Biology, Harvard University", "Pfizer Inc, New York, NY"],
        )];
        let out = filter_papers(papers);
        assert_eq!(out.len(), 1);
        let ind = out[0].industry.as_ref().unwrap();
        assert_eq!(ind.non_academic_authors, vec!["Bo Chen"]);
        assert_eq!(ind.company_affiliations, vec!["pfizer"]);
        assert_eq!(ind.corresponding_email, "");
    }

    #[test]
    fn shared_company_is_deduplicated() {
        let papers = vec![paper(
            "3",
            &["Ann Lee", "Bo Chen", "Cy Diaz"],
            &["Pfizer Inc, New York", "Pfizer Ltd, Sandwich, UK", "Amgen, Thousand Oaks"],
        )];
        let out = filter_papers(papers);
        let ind = out[0].industry.as_ref().unwrap();
        assert_eq!(ind.non_academic_authors.len(), 3);
        assert_eq!(ind.company_affiliations, vec!["pfizer", "amgen"]);
    }

    #[test]
    fn order_is_preserved() {
        let papers = vec![
            paper("10", &["A"], &["Roche, Basel"]),
            paper("11", &["B"], &["Harvard University"]),
            paper("12", &["C"], &["Takeda, Osaka"]),
        ];
        let ids: Vec<String> = filter_papers(papers).into_iter().map(|p| p.pmid).collect();
        assert_eq!(ids, vec!["10", "12"]);
    }

    #[test]
    fn affiliation_beyond_author_list_names_nobody() {
        // Second affiliation has no author at its position
        let p = paper("4", &["Ann Lee"], &["Harvard University", "Biogen, Cambridge"]);
        assert!(industry_affiliation(&p).is_none());
    }

    #[test]
    fn orphan_affiliation_companies_still_accumulate() {
        let p = paper("5", &["Ann Lee"], &["Merck & Co", "Biogen, Cambridge"]);
        let ind = industry_affiliation(&p).unwrap();
        assert_eq!(ind.non_academic_authors, vec!["Ann Lee"]);
        assert_eq!(ind.company_affiliations, vec!["merck", "biogen"]);
    }

    #[test]
    fn non_academic_without_companies_is_ignored() {
        let p = paper("6", &["Ann Lee"], &["University College London"]);
        assert!(industry_affiliation(&p).is_none());
    }

    #[test]
    fn first_corresponding_email_is_reported() {
        let mut p = paper("7", &["Ann Lee"], &["Gilead Sciences, Foster City"]);
        p.corresponding_emails = vec!["ann@gilead.com".to_string(), "x@y.org".to_string()];
        let ind = industry_affiliation(&p).unwrap();
        assert_eq!(ind.corresponding_email, "ann@gilead.com");
    }

    #[test]
    fn dropped_paper_is_not_mutated() {
        let p = paper("8", &["Ann Lee"], &["Harvard University"]);
        assert!(industry_affiliation(&p).is_none());
        assert!(p.industry.is_none());
    }

    #[test]
    fn empty_input() {
        assert!(filter_papers(Vec::new()).is_empty());
    }
}
