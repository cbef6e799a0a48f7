//! Paper record shared by the metadata source, filter and report sink

/// Bibliographic metadata for one paper, as parsed from the remote source.
///
/// `authors` and `affiliations` are paired by position: the affiliation at
/// index `i` belongs to the author at index `i`. The two lists may differ in
/// length when the source omits a name or an affiliation for some author.
/// `corresponding_emails` is not aligned with either list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRecord {
    pub pmid: String,
    pub title: String,
    /// `YYYY-MM-DD`, with missing components omitted
    pub publication_date: String,
    pub authors: Vec<String>,
    pub affiliations: Vec<String>,
    pub corresponding_emails: Vec<String>,
    /// Derived fields, set only on papers retained by the affiliation filter
    pub industry: Option<IndustryAffiliation>,
}

/// Fields derived for a paper with at least one industry-affiliated author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryAffiliation {
    /// Subsequence of [`PaperRecord::authors`]
    pub non_academic_authors: Vec<String>,
    /// Distinct company names, first-seen order
    pub company_affiliations: Vec<String>,
    /// First corresponding-author email, or empty
    pub corresponding_email: String,
}

impl PaperRecord {
    /// Author at `idx`, if the author list is long enough.
    pub fn author_at(&self, idx: usize) -> Option<&str> {
        self.authors.get(idx).map(String::as_str)
    }

    /// First extracted corresponding-author email, or `""`.
    pub fn first_corresponding_email(&self) -> &str {
        self.corresponding_emails
            .first()
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PaperRecord {
        PaperRecord {
            pmid: "1".to_string(),
            authors: vec!["Ann Lee".to_string(), "Bo Chen".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn author_at_in_bounds() {
        assert_eq!(record().author_at(1), Some("Bo Chen"));
    }

    #[test]
    fn author_at_out_of_bounds() {
        assert_eq!(record().author_at(2), None);
    }

    #[test]
    fn first_email_empty_when_none() {
        assert_eq!(record().first_corresponding_email(), "");
    }

    #[test]
    fn first_email_takes_head() {
        let mut r = record();
        r.corresponding_emails = vec!["a@x.com".to_string(), "b@y.com".to_string()];
        assert_eq!(r.first_corresponding_email(), "a@x.com");
    }
}
