// src/analysis/report.rs
use chrono::NaiveDateTime;
use std::fmt::Write;

use super::Analysis;
use crate::extractors::Category;

/// Reports shorter than this (in characters) found next to nothing, so the
/// key-sentence section is appended.
pub const MIN_REPORT_CHARS: usize = 150;

pub fn render(analysis: &Analysis, analyzed_at: NaiveDateTime) -> String {
    let findings = &analysis.findings;
    let mut out = String::from("DOCUMENT ANALYSIS REPORT\n\n");

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Analyzed on: {}", analyzed_at.format("%B %d, %Y %H:%M"));
    let _ = writeln!(out, "Total words: {}", analysis.word_count);
    let _ = writeln!(out, "Key sections found: {}\n", findings.non_empty_categories());

    for category in Category::ALL {
        if findings.is_empty_in(category) {
            continue;
        }
        let _ = writeln!(out, "=== {} ===", category.label().to_uppercase());
        for (i, entry) in findings.entries(category).iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, entry);
        }
        out.push('\n');
    }

    if out.chars().count() < MIN_REPORT_CHARS {
        tracing::debug!(
            sentences = analysis.key_sentences.len(),
            "Few structural matches, appending key sentences"
        );
        out.push_str("\n=== KEY SENTENCES ===\n");
        let bullets: Vec<String> = analysis.key_sentences.iter().map(|s| format!("• {s}")).collect();
        out.push_str(&bullets.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_at;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    /// Entries listed under a section header, without their "N. " prefix.
    fn section(report: &str, header: &str) -> Vec<String> {
        report
            .lines()
            .skip_while(|line| *line != header)
            .skip(1)
            .take_while(|line| !line.is_empty())
            .map(|line| line.split_once(". ").map_or(line, |(_, rest)| rest).to_string())
            .collect()
    }

    #[test]
    fn test_header_lines() {
        let report = analyze_at("The Seller must ship goods.", stamp());
        assert!(report.starts_with("DOCUMENT ANALYSIS REPORT\n\nAnalyzed on: January 05, 2024 09:30\n"));
        assert!(report.contains("Total words: 5\n"));
        assert!(report.contains("Key sections found: 1\n\n"));
    }

    #[test]
    fn test_sections_follow_category_order() {
        let text = "This Agreement shall not exceed $500.00 and is dated January 5, 2024.";
        let report = analyze_at(text, stamp());

        assert_eq!(section(&report, "=== OBLIGATIONS ==="), vec!["exceed $500".to_string()]);
        assert_eq!(section(&report, "=== DATES ==="), vec!["January 5, 2024".to_string()]);
        assert_eq!(section(&report, "=== PAYMENTS ==="), vec!["$500.00".to_string()]);
        assert!(!report.contains("=== PARTIES ==="));

        let obligations = report.find("=== OBLIGATIONS ===").unwrap();
        let dates = report.find("=== DATES ===").unwrap();
        let payments = report.find("=== PAYMENTS ===").unwrap();
        assert!(obligations < dates && dates < payments);
    }

    #[test]
    fn test_definitions_render_term_and_meaning() {
        let text = r#"In this contract "Confidential Information" means all data shared, and the Recipient shall protect it."#;
        let report = analyze_at(text, stamp());
        let definitions = section(&report, "=== DEFINITIONS ===");
        assert!(definitions.contains(&"Confidential Information: all data shared".to_string()));
    }

    #[test]
    fn test_empty_text_falls_back_to_empty_key_sentences() {
        let report = analyze_at("", stamp());
        assert!(report.contains("Total words: 0\n"));
        assert!(report.contains("Key sections found: 0\n"));
        assert!(report.ends_with("\n=== KEY SENTENCES ===\n"));
    }

    #[test]
    fn test_sparse_text_lists_key_sentences() {
        let text = "Nothing here looks like a clause at all. Neither does this second long sentence! Short.";
        let report = analyze_at(text, stamp());
        assert!(report.contains("=== KEY SENTENCES ===\n• Nothing here looks like a clause at all\n• Neither does this second long sentence"));
        assert!(!report.contains("• Short"));
    }

    #[test]
    fn test_long_report_skips_key_sentences() {
        let text = "The Licensee shall pay $1,000.00 on 01/01/2025; the Licensor must deliver the software, \
                    and \"Software\" means the licensed program.";
        let report = analyze_at(text, stamp());
        assert!(report.chars().count() >= MIN_REPORT_CHARS);
        assert!(!report.contains("KEY SENTENCES"));
    }
}
