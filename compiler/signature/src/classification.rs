//! Descriptor classification
//!
//! Functions and constructors take part in contract calls; events only
//! appear in logs. Consumers building call encoders or log decoders use this
//! to pick the descriptors they care about.

use abi::{Abi, Descriptor};

/// Whether a descriptor can be invoked or only logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescriptorClass {
    /// Function or constructor
    Callable,
    /// Event
    Log,
}

impl DescriptorClass {
    /// Canonical display name used for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            DescriptorClass::Callable => "callable",
            DescriptorClass::Log => "log",
        }
    }
}

/// Classify a descriptor by its variant
pub fn classify(descriptor: &Descriptor) -> DescriptorClass {
    match descriptor {
        Descriptor::Function(_) | Descriptor::Constructor(_) => DescriptorClass::Callable,
        Descriptor::Event(_) => DescriptorClass::Log,
    }
}

/// True for functions and constructors, false for events
pub fn is_callable(descriptor: &Descriptor) -> bool {
    classify(descriptor) == DescriptorClass::Callable
}

/// Split an ABI into callable and log descriptors, each in declaration order
pub fn partition_by_class(abi: &Abi) -> (Vec<&Descriptor>, Vec<&Descriptor>) {
    abi.iter().partition(|descriptor| is_callable(descriptor))
}
