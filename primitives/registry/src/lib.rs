#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Signature Registry: an index of ABI descriptors by canonical signature.
//!
//! Matching entries across toolchains means looking them up by signature, or
//! by bare name when the caller does not know the parameter types. This crate
//! provides that index for an already-loaded ABI.

use std::collections::BTreeMap;

use abi::{Abi, Descriptor};
use signature::{display_name, full_signature};

/// A registry of descriptors keyed by their canonical signature.
#[derive(Debug, Default)]
pub struct SignatureRegistry {
    /// Map from signature to descriptor
    entries: BTreeMap<String, Descriptor>,
}

impl SignatureRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self { Self::default() }

    /// Build a registry holding every descriptor of `abi`.
    pub fn from_abi(abi: &Abi) -> Self {
        let mut registry = Self::new();
        for descriptor in abi {
            registry.insert(descriptor.clone());
        }
        logging::trace(
            "registry",
            &format!("indexed {} of {} descriptors", registry.signature_count(), abi.len()),
        );
        registry
    }

    /// Add a descriptor to the registry.
    ///
    /// The first descriptor registered under a signature is kept; later ones
    /// are dropped and `false` is returned.
    pub fn insert(&mut self, descriptor: Descriptor) -> bool {
        let signature = full_signature(&descriptor);
        if self.entries.contains_key(&signature) {
            tracing::warn!(%signature, kind = %descriptor.kind(), "duplicate signature ignored");
            return false;
        }
        self.entries.insert(signature, descriptor);
        true
    }
}

/// Read-only interface to the `SignatureRegistry`.
pub trait SignatureRegistryReader {
    /// All registered signatures, sorted.
    fn list_signatures(&self) -> Vec<&str>;

    /// Get a descriptor by its exact signature.
    ///
    /// Returns `None` if no descriptor has that signature.
    fn get(&self, signature: &str) -> Option<&Descriptor>;

    /// All descriptors whose bare name is `name` (every overload), sorted by
    /// signature.
    fn find_by_name(&self, name: &str) -> Vec<(&str, &Descriptor)>;

    /// Get the total number of registered signatures.
    fn signature_count(&self) -> usize;

    /// Look up a query that is either a full signature or a bare name.
    ///
    /// A full signature matches at most one entry. A bare name matches every
    /// overload.
    fn resolve(&self, query: &str) -> Vec<&Descriptor> {
        if query.contains('(') {
            return self.get(query).into_iter().collect();
        }
        self.find_by_name(query).into_iter().map(|(_, descriptor)| descriptor).collect()
    }
}

/// Implement the interface for `SignatureRegistry`.
impl SignatureRegistryReader for SignatureRegistry {
    fn list_signatures(&self) -> Vec<&str> { self.entries.keys().map(|s| s.as_str()).collect() }

    fn get(&self, signature: &str) -> Option<&Descriptor> { self.entries.get(signature) }

    fn find_by_name(&self, name: &str) -> Vec<(&str, &Descriptor)> {
        self.entries
            .iter()
            .filter(|(signature, _)| display_name(signature) == name)
            .map(|(signature, descriptor)| (signature.as_str(), descriptor))
            .collect()
    }

    fn signature_count(&self) -> usize { self.entries.len() }
}
