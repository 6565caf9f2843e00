// src/drafting/mod.rs
pub mod templates;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::extractors::FieldExtractor;
pub use templates::compose;

/// Kind of document to draft. Tags outside the known set select the will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Nda,
    ServiceContract,
    Will,
}

impl DocumentType {
    /// Maps a form tag ("nda", "contract", "will") to a document type,
    /// ignoring case and surrounding whitespace. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "nda" => Self::Nda,
            "contract" => Self::ServiceContract,
            "will" => Self::Will,
            other => {
                tracing::debug!(tag = other, "Unrecognized document type, drafting a will");
                Self::Will
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub document_type: DocumentType,
    pub description: String,
}

impl GenerationRequest {
    pub fn new(document_type: &str, description: &str) -> Self {
        Self {
            document_type: DocumentType::from_tag(document_type),
            description: description.to_string(),
        }
    }

    /// Consumes the request and renders the document dated `date`.
    pub fn compose_on(self, date: NaiveDate) -> String {
        let fields = FieldExtractor::new().extract(&self.description);
        compose(self.document_type, &fields, date)
    }
}

/// Drafts a document from raw form values, dated today.
pub fn generate(document_type: &str, description: &str) -> String {
    generate_on(document_type, description, Local::now().date_naive())
}

pub fn generate_on(document_type: &str, description: &str, date: NaiveDate) -> String {
    GenerationRequest::new(document_type, description).compose_on(date)
}
