pub mod fields;
pub mod structure;

// Re-export key extraction types for convenience
pub use fields::{ExtractedFields, FieldExtractor};
pub use structure::{Category, Findings, StructureAnalyzer};
