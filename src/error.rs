use thiserror::Error;

/// Errors that can occur during SBML parsing, serialization, and validation
#[derive(Debug, Error)]
pub enum SbmlError {
    /// Error when the input is not well-formed XML or violates the
    /// supported schema subset
    #[error("Failed to parse SBML: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// Error when the document root is not an `sbml` element
    #[error("Unknown root element: expected <sbml>, found <{0}>")]
    UnknownRoot(String),

    /// Error when serializing a document to XML fails
    #[error("Failed to serialize SBML: {0}")]
    Serialize(#[from] quick_xml::SeError),

    /// Error when a Level/Version combination is not implemented
    #[error("Unsupported SBML Level/Version: L{level}V{version}")]
    UnsupportedLevelVersion {
        /// Declared SBML level
        level: u32,
        /// Declared version within the level
        version: u32,
    },

    /// Error when an invalid unit kind is encountered
    #[error("Invalid unit kind: {0}")]
    InvalidUnitKind(String),

    /// Error when a by-name reference does not resolve at validation time
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Error when the document doesn't contain a model
    #[error("Document has no model")]
    MissingModel,
}
