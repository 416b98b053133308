#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Contract ABI data model
//!
//! This crate defines the in-memory shape of a contract interface description:
//! an ordered sequence of function, constructor and event descriptors, each
//! with a typed parameter list. The ABI is produced elsewhere (typically by a
//! Solidity compiler); this crate only loads, holds and saves it.

pub mod descriptor;
pub mod document;
pub mod name;

// Re-export the model types for convenience
pub use descriptor::*;
pub use document::{Abi, AbiError};
pub use name::DescriptorName;
