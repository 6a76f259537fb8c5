use std::path::PathBuf;

use thiserror::Error;

use crate::{
    document::SbmlDocument,
    error::SbmlError,
    xml::{reader::read_sbml, writer::write_sbml},
};

/// Loads and parses an SBML document from an XML file.
///
/// # Arguments
///
/// * `path` - Path to the XML file containing the SBML document
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(SbmlDocument)` - The successfully parsed document
/// * `Err(IOError)` - An error that occurred during file reading or parsing
pub fn load_sbml(path: impl Into<PathBuf>) -> Result<SbmlDocument, IOError> {
    let text = std::fs::read_to_string(path.into())?;
    Ok(read_sbml(&text)?)
}

/// Saves an SBML document to an XML file.
///
/// # Arguments
///
/// * `path` - Path to write the XML file to
/// * `doc` - A reference to the document to save
pub fn save_sbml(path: impl Into<PathBuf>, doc: &SbmlDocument) -> Result<(), IOError> {
    let xml = write_sbml(doc)?;
    std::fs::write(path.into(), xml)?;
    Ok(())
}

/// Loads an SBML document from its JSON rendition.
///
/// The JSON rendition is the plain serde serialization of the document
/// model; it round-trips with [`save_json`] and carries no XML-level
/// defaulting or normalization of its own.
pub fn load_json(path: impl Into<PathBuf>) -> Result<SbmlDocument, IOError> {
    let file = std::fs::File::open(path.into()).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves an SBML document as JSON.
pub fn save_json(path: impl Into<PathBuf>, doc: &SbmlDocument) -> Result<(), IOError> {
    let file = std::fs::File::create(path.into()).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, doc).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur during document I/O operations.
#[derive(Error, Debug)]
pub enum IOError {
    /// Indicates that the specified file could not be found or opened.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// Indicates that reading or writing the SBML text failed.
    #[error("Failed to process SBML: {0}")]
    Sbml(#[from] SbmlError),

    /// Indicates that the file contents could not be parsed as valid JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
