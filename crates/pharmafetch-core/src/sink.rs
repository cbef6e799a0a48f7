//! CSV report sink: a file (written to a tmp path, then renamed) or stdout

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::record::PaperRecord;

/// Report columns, in output order
pub const HEADER: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Separator for multi-valued cells
pub const LIST_SEPARATOR: &str = "; ";

/// Render one record as a report row.
///
/// Records without derived fields get empty derived cells.
pub fn report_row(paper: &PaperRecord) -> [String; 6] {
    let (authors, companies, email) = match &paper.industry {
        Some(ind) => (
            ind.non_academic_authors.join(LIST_SEPARATOR),
            ind.company_affiliations.join(LIST_SEPARATOR),
            ind.corresponding_email.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    [
        paper.pmid.clone(),
        paper.title.clone(),
        paper.publication_date.clone(),
        authors,
        companies,
        email,
    ]
}

/// Write header plus one row per paper to `writer`.
pub fn write_csv<W: Write>(papers: &[PaperRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;
    for paper in papers {
        csv_writer
            .write_record(report_row(paper))
            .with_context(|| format!("Failed to write row for PMID {}", paper.pmid))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write the report to `destination`, or to stdout when `None`.
///
/// An empty paper list writes nothing and logs a warning.
/// File output goes to `<destination>.tmp` first and is renamed on success.
pub fn write_report(papers: &[PaperRecord], destination: Option<&Path>) -> Result<()> {
    if papers.is_empty() {
        log::warn!("No papers to write to CSV");
        return Ok(());
    }

    match destination {
        Some(path) => {
            let tmp_path = tmp_path_for(path);
            let file = File::create(&tmp_path)
                .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
            if let Err(e) = write_csv(papers, io::BufWriter::new(file)) {
                let _ = fs::remove_file(&tmp_path);
                return Err(e);
            }
            fs::rename(&tmp_path, path).with_context(|| {
                format!("Failed to move {} to {}", tmp_path.display(), path.display())
            })?;
            log::info!("Results written to {}", path.display());
        }
        None => write_csv(papers, io::stdout().lock())?,
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::IndustryAffiliation;

    fn retained_paper() -> PaperRecord {
        PaperRecord {
            pmid: "38000001".to_string(),
            title: "Kinase inhibitors, revisited".to_string(),
            publication_date: "2024-03-15".to_string(),
            authors: vec!["Ann Lee".to_string(), "Bo Chen".to_string()],
            affiliations: vec!["Pfizer Inc".to_string(), "Pfizer Inc".to_string()],
            corresponding_emails: vec!["ann.lee@pfizer.com".to_string()],
            industry: Some(IndustryAffiliation {
                non_academic_authors: vec!["Ann Lee".to_string(), "Bo Chen".to_string()],
                company_affiliations: vec!["pfizer".to_string()],
                corresponding_email: "ann.lee@pfizer.com".to_string(),
            }),
        }
    }

    fn render(papers: &[PaperRecord]) -> String {
        let mut out = Vec::new();
        write_csv(papers, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_paper_two_authors_one_row() {
        let out = render(&[retained_paper()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email"
        );
        assert_eq!(
            lines[1],
            "38000001,\"Kinase inhibitors, revisited\",2024-03-15,Ann Lee; Bo Chen,pfizer,ann.lee@pfizer.com"
        );
    }

    #[test]
    fn row_without_derived_fields_has_empty_cells() {
        let mut paper = retained_paper();
        paper.industry = None;
        let row = report_row(&paper);
        assert_eq!(row[3], "");
        assert_eq!(row[4], "");
        assert_eq!(row[5], "");
    }

    #[test]
    fn multiple_companies_joined() {
        let mut paper = retained_paper();
        if let Some(ind) = paper.industry.as_mut() {
            ind.company_affiliations = vec!["pfizer".to_string(), "Acme Biotech".to_string()];
        }
        assert_eq!(report_row(&paper)[4], "pfizer; Acme Biotech");
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("out/results.csv")),
            PathBuf::from("out/results.csv.tmp")
        );
    }

    #[test]
    fn write_report_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        write_report(&[retained_paper()], Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn write_report_empty_is_noop() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        write_report(&[], Some(&path)).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn write_report_without_destination_uses_stdout() {
        // libtest captures stdout
        assert!(write_report(&[retained_paper()], None).is_ok());
    }

    #[test]
    fn write_report_missing_dir_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("results.csv");
        assert!(write_report(&[retained_paper()], Some(&path)).is_err());
    }
}
