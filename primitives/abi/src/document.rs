//! ABI documents
//!
//! Loading and saving whole ABIs. Compiler output comes either as a bare JSON
//! array of descriptors or as a build artifact object with an `abi` field;
//! both are accepted. Saving always writes the bare array.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::descriptor::{Descriptor, DescriptorKind};

/// Errors that can occur when loading or saving an ABI
#[derive(Debug, Error)]
pub enum AbiError {
    /// Failed to read or write the ABI file
    #[error("Failed to access ABI file: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON
    #[error("Failed to parse ABI JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// One entry of the ABI array does not match the descriptor shape
    #[error("Invalid ABI entry at index {index}: {source}")]
    Entry {
        /// Position of the entry in the ABI array
        index: usize,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
    /// The top-level JSON value is neither an array nor an artifact object
    #[error("Unrecognized ABI document: expected an array or an object with an `abi` array")]
    UnrecognizedDocument,
}

/// An ordered sequence of descriptors
///
/// Order mirrors declaration order and is never changed: no deduplication,
/// no sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi {
    descriptors: Vec<Descriptor>,
}

impl Abi {
    /// Wrap an existing descriptor list
    pub fn new(descriptors: Vec<Descriptor>) -> Self { Self { descriptors } }

    /// Parse an ABI from JSON text (bare array or artifact object)
    pub fn from_json_str(json: &str) -> Result<Self, AbiError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build an ABI from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, AbiError> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("abi") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(AbiError::UnrecognizedDocument),
            },
            _ => return Err(AbiError::UnrecognizedDocument),
        };

        let descriptors = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry).map_err(|source| AbiError::Entry { index, source })
            })
            .collect::<Result<Vec<Descriptor>, _>>()?;

        Ok(Self::new(descriptors))
    }

    /// Load an ABI from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, AbiError> {
        let content = std::fs::read_to_string(path)?;
        let abi = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), descriptors = abi.len(), "loaded ABI");
        Ok(abi)
    }

    /// Serialize as a pretty-printed JSON array
    pub fn to_json_string(&self) -> Result<String, AbiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the ABI to a JSON file with pretty formatting
    pub fn to_file(&self, path: &Path) -> Result<(), AbiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        // Ensure file ends with a newline (POSIX standard)
        use std::io::Write;
        writeln!(file)?;
        Ok(())
    }

    /// All descriptors in declaration order
    pub fn descriptors(&self) -> &[Descriptor] { &self.descriptors }

    /// Consume the ABI and return its descriptors
    pub fn into_descriptors(self) -> Vec<Descriptor> { self.descriptors }

    /// Iterate over descriptors in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> { self.descriptors.iter() }

    /// Number of descriptors
    pub fn len(&self) -> usize { self.descriptors.len() }

    /// Whether the ABI has no descriptors
    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }

    /// Descriptors of one kind, in declaration order
    pub fn of_kind(&self, kind: DescriptorKind) -> Vec<&Descriptor> {
        self.descriptors.iter().filter(|d| d.kind() == kind).collect()
    }

    /// The constructor, if the ABI declares one
    pub fn constructor(&self) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.kind() == DescriptorKind::Constructor)
    }
}

impl From<Vec<Descriptor>> for Abi {
    fn from(descriptors: Vec<Descriptor>) -> Self { Self::new(descriptors) }
}

impl<'a> IntoIterator for &'a Abi {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter { self.descriptors.iter() }
}
