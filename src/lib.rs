//! SBML Document Library
//!
//! This library provides a minimal, self-contained document model for SBML
//! Level 1, including:
//! - An in-memory document model (units, compartments, species, parameters,
//!   rules, reactions, kinetic laws)
//! - Reading SBML Level 1 XML into the document model
//! - Writing the document model back to SBML Level 1 XML
//! - Lazy by-name reference validation
//! - Reading/writing the model as JSON
//! - Rendering document summaries as tables

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::document::*;
    pub use crate::error::SbmlError;
    pub use crate::io::*;
    pub use crate::unit::UnitKind;
    pub use crate::validation::{validate_references, ValidationIssue, ValidationReport};
    pub use crate::xml::reader::read_sbml;
    pub use crate::xml::writer::write_sbml;
}

/// The SBML document model
pub mod document;

/// Base unit kinds of the SBML Level 1 enumeration
pub mod unit;

/// Error types for parsing, serialization and validation
pub mod error;

/// The SBML Level 1 XML codec
pub mod xml {
    /// Raw serde structures mirroring the wire format
    pub(crate) mod schema;
    /// Reading XML into the document model
    pub mod reader;
    /// Writing the document model to XML
    pub mod writer;
}

/// Validation of by-name cross-references
pub mod validation;

/// Display implementations for document summaries
pub mod info;

/// File IO functionality
pub mod io;
