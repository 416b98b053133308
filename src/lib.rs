// SPDX-License-Identifier: CC0-1.0

//! abisig umbrella crate.
//!
//! Re-exports the ABI data model and the signature operations so callers can
//! depend on a single crate. Configuration, logging and the command-line tool
//! live in the workspace member crates under `compiler` and `cli`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![doc(test(attr(warn(unused))))]

pub use abi::{Abi, AbiError, Descriptor, DescriptorKind, DescriptorName, EventParam, Param};
pub use signature::{
    classify, display_name, full_signature, is_callable, partition_by_class, signatures,
    split_signature, split_types, type_list, DescriptorClass, SignatureSummary,
};

/// Miscellaneous metadata about the abisig workspace.
pub mod abisig_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
