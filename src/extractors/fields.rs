// src/extractors/fields.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// --- Defaults used when a rule finds nothing ---
pub const DEFAULT_PARTY_A: &str = "[Your Name/Company]";
pub const DEFAULT_PARTY_B: &str = "[Other Party]";
pub const DEFAULT_DURATION: &str = "the duration specified in this agreement";
pub const DEFAULT_PROTECTED_SUBJECT: &str = "confidential information";
pub const DEFAULT_PURPOSE: &str = "evaluating the potential business relationship";
pub const DEFAULT_SERVICES: &str = "[Describe the services to be provided]";

// Cut points for the NDA purpose clause, applied in this order.
const PURPOSE_CUT_MARKERS: [&str; 3] = ["for", "between", "protecting"];

// --- Regex Patterns (Lazy Static) ---
// An integer immediately followed by a unit, optionally pluralized.
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(year|month|day|week)s?").expect("Failed to compile DURATION_RE")
});

// "between A and B" / "for A with B". Party B stops before a trailing
// for/between/protect clause, clause punctuation, or end of line.
static PARTIES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\b(?:between|for)\s+(.+?)\s+(?:and|with)\s+(.+?)(?:\s+(?:for|between|protect(?:ing|s)?)\b|[.;,]|$)",
    )
    .expect("Failed to compile PARTIES_RE")
});

static PROTECTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)protect(?:ing|s)?\s+(.+?)(?:\s+for\b|\s+between\b|$)")
        .expect("Failed to compile PROTECTED_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Year,
    Month,
    Day,
    Week,
}

impl DurationUnit {
    fn from_match(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "year" => Some(Self::Year),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// Length of an agreement's term as written in the description.
/// The count is kept as the matched digits so arbitrarily long numbers survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermDuration {
    pub count: String,
    pub unit: DurationUnit,
}

impl fmt::Display for TermDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count.trim_start_matches('0') == "1" { "" } else { "s" };
        write!(f, "{} {}{}", self.count, self.unit.as_str(), plural)
    }
}

/// Fields pulled out of a free-text description. Every field has a usable
/// value: rules that find nothing leave the placeholder default in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub duration: Option<TermDuration>,
    pub party_a: String,
    pub party_b: String,
    pub protected_subject: String,
    pub purpose_clause: String,
    pub services_clause: String,
    /// The description itself, unless it is blank.
    pub bequest: Option<String>,
}

impl ExtractedFields {
    /// The term as it reads inside a clause.
    pub fn duration_text(&self) -> String {
        self.duration
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_DURATION.to_string())
    }
}

// --- Extractor ---
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self { Self {} }

    /// Runs every rule independently over `description`. Never fails.
    pub fn extract(&self, description: &str) -> ExtractedFields {
        let duration = self.extract_duration(description);
        let (party_a, party_b) = self
            .extract_parties(description)
            .unwrap_or_else(|| (DEFAULT_PARTY_A.to_string(), DEFAULT_PARTY_B.to_string()));
        let protected_subject = self
            .extract_protected_subject(description)
            .unwrap_or_else(|| DEFAULT_PROTECTED_SUBJECT.to_string());

        tracing::debug!(
            duration = ?duration,
            party_a = %party_a,
            party_b = %party_b,
            protected_subject = %protected_subject,
            "Extracted description fields"
        );

        ExtractedFields {
            duration,
            party_a,
            party_b,
            protected_subject,
            purpose_clause: purpose_clause(description),
            services_clause: services_clause(description),
            bequest: (!description.trim().is_empty()).then(|| description.to_string()),
        }
    }

    fn extract_duration(&self, description: &str) -> Option<TermDuration> {
        let caps = DURATION_RE.captures(description)?;
        let unit = DurationUnit::from_match(&caps[2])?;
        Some(TermDuration { count: caps[1].to_string(), unit })
    }

    /// First match only; both captures must be non-blank.
    fn extract_parties(&self, description: &str) -> Option<(String, String)> {
        let caps = PARTIES_RE.captures(description)?;
        let party_a = caps[1].trim();
        let party_b = caps[2].trim();
        if party_a.is_empty() || party_b.is_empty() {
            tracing::trace!("Party pattern matched blank text, using placeholders");
            return None;
        }
        Some((party_a.to_string(), party_b.to_string()))
    }

    fn extract_protected_subject(&self, description: &str) -> Option<String> {
        let caps = PROTECTED_RE.captures(description)?;
        let subject = caps[1].trim();
        (!subject.is_empty()).then(|| subject.to_string())
    }
}

/// Cuts the description at the first "for", then at the first "between", then
/// at the first "protecting". Plain case-sensitive substrings, so words such
/// as "information" are cut too.
fn purpose_clause(description: &str) -> String {
    let mut rest = description;
    for marker in PURPOSE_CUT_MARKERS {
        if let Some(idx) = rest.find(marker) {
            rest = &rest[..idx];
        }
    }
    let rest = rest.trim();
    if rest.is_empty() {
        DEFAULT_PURPOSE.to_string()
    } else {
        rest.to_string()
    }
}

/// Everything before the first "for", or the whole description.
fn services_clause(description: &str) -> String {
    let head = description.split("for").next().unwrap_or_default().trim();
    if head.is_empty() {
        DEFAULT_SERVICES.to_string()
    } else {
        head.to_string()
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const STARTUP_NDA: &str = "I need an NDA between my tech startup and a potential investor for 2 years protecting our software designs";

    #[test]
    fn test_extracts_all_fields_from_nda_description() {
        let fields = FieldExtractor::new().extract(STARTUP_NDA);

        assert_eq!(fields.party_a, "my tech startup");
        assert_eq!(fields.party_b, "a potential investor");
        assert_eq!(fields.protected_subject, "our software designs");
        assert_eq!(fields.duration_text(), "2 years");
        assert_eq!(fields.purpose_clause, "I need an NDA");
        assert_eq!(fields.services_clause, "I need an NDA between my tech startup and a potential investor");
        assert_eq!(fields.bequest.as_deref(), Some(STARTUP_NDA));
    }

    #[test]
    fn test_empty_description_uses_every_default() {
        let fields = FieldExtractor::new().extract("");

        assert_eq!(fields.duration, None);
        assert_eq!(fields.duration_text(), DEFAULT_DURATION);
        assert_eq!(fields.party_a, DEFAULT_PARTY_A);
        assert_eq!(fields.party_b, DEFAULT_PARTY_B);
        assert_eq!(fields.protected_subject, DEFAULT_PROTECTED_SUBJECT);
        assert_eq!(fields.purpose_clause, DEFAULT_PURPOSE);
        assert_eq!(fields.services_clause, DEFAULT_SERVICES);
        assert_eq!(fields.bequest, None);
    }

    #[rstest]
    #[case("valid for 3 months", "3 months")]
    #[case("lasting 1 Year only", "1 year")]
    #[case("a 10-week engagement", "the duration specified in this agreement")]
    #[case("about 6weeks", "6 weeks")]
    #[case("for 5 DAYS", "5 days")]
    #[case("no term given", "the duration specified in this agreement")]
    fn test_duration_rule(#[case] description: &str, #[case] expected: &str) {
        let fields = FieldExtractor::new().extract(description);
        assert_eq!(fields.duration_text(), expected);
    }

    #[test]
    fn test_first_duration_wins() {
        let fields = FieldExtractor::new().extract("4 weeks notice, renewable after 2 years");
        assert_eq!(
            fields.duration,
            Some(TermDuration { count: "4".to_string(), unit: DurationUnit::Week })
        );
    }

    #[rstest]
    #[case("Contract for Acme Corp with Jane Doe", "Acme Corp", "Jane Doe")]
    #[case("BETWEEN Alpha Ltd AND Beta GmbH.", "Alpha Ltd", "Beta GmbH")]
    #[case("between us and them, effective today", "us", "them")]
    #[case("between Ann and Bob protecting recipes", "Ann", "Bob")]
    fn test_party_rule(#[case] description: &str, #[case] a: &str, #[case] b: &str) {
        let fields = FieldExtractor::new().extract(description);
        assert_eq!(fields.party_a, a);
        assert_eq!(fields.party_b, b);
    }

    #[test]
    fn test_party_rule_without_conjunction_falls_back() {
        let fields = FieldExtractor::new().extract("An agreement between friends");
        assert_eq!(fields.party_a, DEFAULT_PARTY_A);
        assert_eq!(fields.party_b, DEFAULT_PARTY_B);
    }

    #[rstest]
    #[case("protects trade secrets between two firms", "trade secrets")]
    #[case("Protect the recipe for 2 years", "the recipe")]
    #[case("protecting our formulas", "our formulas")]
    #[case("nothing sensitive here", "confidential information")]
    fn test_protected_subject_rule(#[case] description: &str, #[case] expected: &str) {
        let fields = FieldExtractor::new().extract(description);
        assert_eq!(fields.protected_subject, expected);
    }

    #[rstest]
    #[case("Review of the merger", "Review of the merger")]
    #[case("for 2 years", "evaluating the potential business relationship")]
    #[case("Joint research protecting data", "Joint research")]
    // "information" contains "for" and is cut there
    #[case("Sharing information with partners", "Sharing in")]
    fn test_purpose_clause_cuts_in_order(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(purpose_clause(description), expected);
    }

    #[test]
    fn test_whitespace_description_has_no_bequest() {
        let fields = FieldExtractor::new().extract("   \n ");
        assert_eq!(fields.bequest, None);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = FieldExtractor::new();
        assert_eq!(extractor.extract(STARTUP_NDA), extractor.extract(STARTUP_NDA));
    }
}
