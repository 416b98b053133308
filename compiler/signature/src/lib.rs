#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Signature canonicalization for contract ABIs.
//!
//! Turns ABI descriptors into the textual `name(type1,type2,...)` form used
//! to identify functions and events across toolchains, splits such strings
//! back into their parts, and tells callable descriptors apart from events.
//!
//! Every function here is pure and works on borrowed data.

use abi::{Abi, Descriptor, DescriptorKind, DescriptorName};
use serde::Serialize;

/// Callable vs. log classification of descriptors
pub mod classification;
/// Splitting signature strings into name and type list
pub mod split;

pub use classification::{classify, is_callable, partition_by_class, DescriptorClass};
pub use split::{display_name, split_signature, split_types, type_list};

/// Canonical signature of a descriptor.
///
/// A name that is already a full signature is returned unchanged; otherwise
/// the input types are joined with `,` (no spaces) and wrapped in
/// parentheses after the name.
///
/// A `RawName` built by hand that contains `(` is treated as qualified too.
pub fn full_signature(descriptor: &Descriptor) -> String {
    match descriptor.name() {
        DescriptorName::RawName(name) if !name.contains('(') => {
            format!("{}({})", name, descriptor.input_types().join(","))
        }
        qualified => qualified.as_str().to_string(),
    }
}

/// Signatures of every descriptor, in declaration order
pub fn signatures(abi: &Abi) -> Vec<String> { abi.iter().map(full_signature).collect() }

/// A descriptor reduced to its identifying parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureSummary {
    /// Descriptor variant
    pub kind: DescriptorKind,
    /// Bare name
    pub name: String,
    /// Canonical signature
    pub signature: String,
    /// Raw comma-separated type list
    pub types: String,
    /// Whether the descriptor is a function or constructor
    pub callable: bool,
}

impl SignatureSummary {
    /// Summarize one descriptor
    pub fn from_descriptor(descriptor: &Descriptor) -> Self {
        let signature = full_signature(descriptor);
        let (name, types) = split_signature(&signature);
        Self {
            kind: descriptor.kind(),
            name: name.to_string(),
            types,
            callable: is_callable(descriptor),
            signature,
        }
    }
}
