//! Fixed keyword tables for affiliation classification
//!
//! All entries are lower-case and matched as substrings of the lower-cased
//! affiliation text.

/// Terms that indicate an academic or clinical institution
pub static ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "laboratory",
    "hospital",
    "clinic",
    "medical center",
    "research center",
    "dept",
    "department",
    "faculty",
];

/// Generic terms that indicate a pharmaceutical or biotech company
pub static PHARMA_KEYWORDS: &[&str] = &[
    "pharmaceutical",
    "pharma",
    "biotech",
    "biotechnology",
    "therapeutics",
    "inc",
    "ltd",
    "llc",
    "corp",
    "corporation",
    "gmbh",
    "co",
    "company",
    "bioscience",
    "biopharm",
    "biopharma",
    "genomics",
    "genetics",
];

/// Known pharmaceutical and biotech companies
pub static KNOWN_COMPANIES: &[&str] = &[
    "pfizer",
    "merck",
    "novartis",
    "roche",
    "johnson & johnson",
    "janssen",
    "astrazeneca",
    "gsk",
    "glaxosmithkline",
    "bristol-myers squibb",
    "bms",
    "sanofi",
    "abbvie",
    "eli lilly",
    "amgen",
    "gilead",
    "biogen",
    "celgene",
    "regeneron",
    "vertex",
    "alexion",
    "alnylam",
    "moderna",
    "biontech",
    "curevac",
    "genentech",
    "novo nordisk",
    "takeda",
    "bayer",
    "boehringer ingelheim",
    "astellas",
    "daiichi sankyo",
    "otsuka",
    "teva",
    "mylan",
    "viatris",
    "fresenius",
    "hikma",
];

/// Whether `lowered` contains any term from `table`.
///
/// `lowered` must already be lower-case.
pub fn contains_any(lowered: &str, table: &[&str]) -> bool {
    table.iter().any(|term| lowered.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        for table in [ACADEMIC_KEYWORDS, PHARMA_KEYWORDS, KNOWN_COMPANIES] {
            for term in table {
                assert_eq!(*term, term.to_lowercase(), "{term} is not lower-case");
            }
        }
    }

    #[test]
    fn contains_any_substring() {
        assert!(contains_any("dept. of biology", ACADEMIC_KEYWORDS));
        assert!(!contains_any("acme labs", ACADEMIC_KEYWORDS));
    }
}
