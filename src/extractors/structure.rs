// src/extractors/structure.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

// --- Regex Patterns for Structural Elements (Lazy Static) ---
// Clause-style captures run lazily up to the next period, semicolon, comma,
// or newline. A clause with no closing boundary is not reported.
static PARTIES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:party|between|parties)\s*(.*?)[\n.;,]")
        .expect("Failed to compile PARTIES_RE")
});

static OBLIGATIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:shall\s+not|shall|must|will\s+not|will|agrees\s+to)\s+(.*?)[\n.;,]")
        .expect("Failed to compile OBLIGATIONS_RE")
});

// 12/31/2024, 1-2-24, Jan 5, 2024, September 30 2025
static DATES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4})\b",
    )
    .expect("Failed to compile DATES_RE")
});

static PAYMENTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d+(?:,\d{3})*(?:\.\d{2})?").expect("Failed to compile PAYMENTS_RE")
});

// Two alternatives: `"Term" means ...` (groups 1, 2) and
// `term "Term" shall mean ...` (groups 3, 4).
static DEFINITIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)"([^"]+)"\s+means\s+(.*?)[\n.;,]|term\s+"([^"]+)"\s+shall\s+mean\s+(.*?)[\n.;,]"#,
    )
    .expect("Failed to compile DEFINITIONS_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Parties,
    Obligations,
    Dates,
    Payments,
    Definitions,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 5] = [
        Category::Parties,
        Category::Obligations,
        Category::Dates,
        Category::Payments,
        Category::Definitions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Parties => "Parties",
            Category::Obligations => "Obligations",
            Category::Dates => "Dates",
            Category::Payments => "Payments",
            Category::Definitions => "Definitions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Definition {
    pub term: String,
    pub meaning: String,
}

/// Deduplicated matches per category, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub parties: Vec<String>,
    pub obligations: Vec<String>,
    pub dates: Vec<String>,
    pub payments: Vec<String>,
    pub definitions: Vec<Definition>,
}

impl Findings {
    /// Display lines for one category; definitions read "term: meaning".
    pub fn entries(&self, category: Category) -> Vec<String> {
        match category {
            Category::Parties => self.parties.clone(),
            Category::Obligations => self.obligations.clone(),
            Category::Dates => self.dates.clone(),
            Category::Payments => self.payments.clone(),
            Category::Definitions => self
                .definitions
                .iter()
                .map(|d| format!("{}: {}", d.term, d.meaning))
                .collect(),
        }
    }

    pub fn is_empty_in(&self, category: Category) -> bool {
        match category {
            Category::Parties => self.parties.is_empty(),
            Category::Obligations => self.obligations.is_empty(),
            Category::Dates => self.dates.is_empty(),
            Category::Payments => self.payments.is_empty(),
            Category::Definitions => self.definitions.is_empty(),
        }
    }

    pub fn non_empty_categories(&self) -> usize {
        Category::ALL.iter().filter(|c| !self.is_empty_in(**c)).count()
    }
}

// --- Main Analyzer Structure ---
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn new() -> Self { Self {} }

    /// Runs the five independent pattern passes over `text`.
    pub fn scan(&self, text: &str) -> Findings {
        let findings = Findings {
            parties: clause_captures(&PARTIES_RE, text),
            obligations: clause_captures(&OBLIGATIONS_RE, text),
            dates: dedup(DATES_RE.captures_iter(text).map(|c| c[1].to_string())),
            payments: dedup(PAYMENTS_RE.find_iter(text).map(|m| m.as_str().to_string())),
            definitions: self.scan_definitions(text),
        };

        tracing::debug!(
            parties = findings.parties.len(),
            obligations = findings.obligations.len(),
            dates = findings.dates.len(),
            payments = findings.payments.len(),
            definitions = findings.definitions.len(),
            "Structural scan complete"
        );
        findings
    }

    fn scan_definitions(&self, text: &str) -> Vec<Definition> {
        let pairs = DEFINITIONS_RE.captures_iter(text).filter_map(|caps| {
            // Only one alternative participates in a match; keep its groups.
            let term = caps.get(1).or_else(|| caps.get(3))?;
            let meaning = caps.get(2).or_else(|| caps.get(4)).map_or("", |m| m.as_str());
            Some(Definition {
                term: term.as_str().trim().to_string(),
                meaning: meaning.trim().to_string(),
            })
        });
        dedup(pairs)
    }
}

/// Group 1 of every match, trimmed, blanks dropped. A category whose only
/// captures are blank ("The parties, ...") is therefore not counted as found.
fn clause_captures(re: &Regex, text: &str) -> Vec<String> {
    dedup(
        re.captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|clause| !clause.is_empty()),
    )
}

fn dedup<T: Eq + Hash + Clone>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}
