use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::processor::Comparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Successful,
    Failed,
}

/// Everything a verification run has to say
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub seller_id: String,
    /// Display name of the catalog file
    pub index_name: String,
    pub total_listed: usize,
    pub total_indexed: usize,
    pub verdict: Verdict,
    #[serde(flatten)]
    pub comparison: Comparison,
}

impl VerificationReport {
    pub fn new(
        seller_id: impl Into<String>,
        index_name: impl Into<String>,
        total_listed: usize,
        total_indexed: usize,
        comparison: Comparison,
    ) -> Self {
        let verdict = if comparison.is_successful() {
            Verdict::Successful
        } else {
            Verdict::Failed
        };

        Self {
            seller_id: seller_id.into(),
            index_name: index_name.into(),
            total_listed,
            total_indexed,
            verdict,
            comparison,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        let index = &self.index_name;
        let missing = &self.comparison.missing;
        let extra = &self.comparison.extra;
        let url_issues = &self.comparison.url_issues;

        writeln!(out, "\n--- Article Verification Results ---")?;
        writeln!(out, "\nTotal articles in JSON: {}", self.total_listed)?;
        writeln!(out, "Total articles in {}: {}", index, self.total_indexed)?;

        if missing.is_empty() {
            writeln!(out, "\nAll articles from JSON are present in {}.", index)?;
        } else {
            writeln!(
                out,
                "\nWARNING: {} articles from JSON are missing in {}:",
                missing.len(),
                index
            )?;
            for article in missing {
                writeln!(out, "  - ID: {}, Name: {}", article.id, article.name)?;
            }
        }

        if !extra.is_empty() {
            writeln!(
                out,
                "\nINFO: {} articles in {} are not in JSON (may be normal if manually added):",
                extra.len(),
                index
            )?;
            for article in extra {
                writeln!(out, "  - ID: {}, Name: {}", article.id, article.name)?;
            }
        }

        if url_issues.is_empty() {
            writeln!(out, "\nAll URLs are properly formatted.")?;
        } else {
            writeln!(out, "\nWARNING: {} URL issues found:", url_issues.len())?;
            for issue in url_issues {
                writeln!(
                    out,
                    "  - ID: {}, Name: {}, Issue: {}",
                    issue.id, issue.name, issue.issue
                )?;
            }
        }

        match self.verdict {
            Verdict::Successful => writeln!(
                out,
                "\nVERIFICATION SUCCESSFUL: All articles are properly indexed and URLs are correctly formatted."
            )?,
            Verdict::Failed => writeln!(
                out,
                "\nVERIFICATION FAILED: Issues were found during verification. See above for details."
            )?,
        }

        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, UrlIssue};

    fn render(report: &VerificationReport) -> String {
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn failing_comparison() -> Comparison {
        Comparison {
            missing: vec![Article::listed("1", "Lamp", "", "5")],
            extra: vec![Article::indexed("4", "Vase")],
            url_issues: vec![UrlIssue {
                id: "2".to_string(),
                name: "Chair".to_string(),
                issue: "URL missing scheme or domain".to_string(),
            }],
        }
    }

    #[test]
    fn test_failed_report_sections() {
        let report = VerificationReport::new("123", "index.htm", 3, 3, failing_comparison());
        let text = render(&report);

        assert_eq!(report.verdict, Verdict::Failed);
        assert!(text.contains("Total articles in JSON: 3"));
        assert!(text.contains("Total articles in index.htm: 3"));
        assert!(text.contains("WARNING: 1 articles from JSON are missing in index.htm:\n  - ID: 1, Name: Lamp"));
        assert!(text.contains("INFO: 1 articles in index.htm are not in JSON"));
        assert!(text.contains("  - ID: 4, Name: Vase"));
        assert!(text.contains(
            "WARNING: 1 URL issues found:\n  - ID: 2, Name: Chair, Issue: URL missing scheme or domain"
        ));
        assert!(text.trim_end().ends_with("See above for details."));
        assert!(text.contains("VERIFICATION FAILED"));
    }

    #[test]
    fn test_successful_report_omits_empty_extra_section() {
        let report = VerificationReport::new("123", "index.htm", 2, 2, Comparison::default());
        let text = render(&report);

        assert_eq!(report.verdict, Verdict::Successful);
        assert!(text.contains("All articles from JSON are present in index.htm."));
        assert!(text.contains("All URLs are properly formatted."));
        assert!(!text.contains("INFO:"));
        assert!(text.contains("VERIFICATION SUCCESSFUL"));
    }

    #[test]
    fn test_extra_only_is_successful() {
        let comparison = Comparison {
            extra: vec![Article::indexed("9", "Manual entry")],
            ..Comparison::default()
        };
        let report = VerificationReport::new("1", "index.htm", 0, 1, comparison);

        assert_eq!(report.verdict, Verdict::Successful);
        assert!(render(&report).contains("INFO: 1 articles"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = VerificationReport::new("123", "index.htm", 3, 3, failing_comparison());
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["verdict"], "failed");
        assert_eq!(value["seller_id"], "123");
        assert_eq!(value["missing"][0]["id"], "1");
        assert_eq!(value["extra"][0]["name"], "Vase");
        assert!(value["extra"][0].get("url").is_none());
        assert_eq!(value["url_issues"][0]["issue"], "URL missing scheme or domain");
    }
}
