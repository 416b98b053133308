//! ABI descriptors
//!
//! This module defines the entries of a contract ABI. The JSON shape follows
//! solc output: the `type` field selects the descriptor variant and the
//! remaining fields depend on it.
//!
//! Solc output round-trips to the same JSON. Missing `outputs` and `anonymous`
//! fields are written back with their defaults, and keys the model does not
//! know (legacy `constant`, `payable`) are dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::DescriptorName;

/// One entry of an ABI sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Descriptor {
    /// A contract function
    Function(FunctionDef),
    /// The contract constructor
    Constructor(ConstructorDef),
    /// A log event
    Event(EventDef),
}

/// Function descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    /// Declared identifier, possibly already in signature form
    pub name: DescriptorName,
    /// Input parameters in declaration order
    pub inputs: Vec<Param>,
    /// Return values
    #[serde(default)]
    pub outputs: Vec<Param>,
    /// Mutability tag (e.g. "view", "nonpayable"), carried through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

/// Constructor descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDef {
    /// Compilers emit constructors without a name; it then stays empty
    #[serde(default, skip_serializing_if = "DescriptorName::is_empty")]
    pub name: DescriptorName,
    /// Input parameters in declaration order
    pub inputs: Vec<Param>,
    /// Mutability tag, carried through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

/// Event descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    /// Declared identifier, possibly already in signature form
    pub name: DescriptorName,
    /// Event fields in declaration order
    pub inputs: Vec<EventParam>,
    /// Whether the event omits its signature topic
    #[serde(default)]
    pub anonymous: bool,
}

/// Function or constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Parameter identifier; empty for unnamed parameters
    #[serde(default)]
    pub name: String,
    /// Canonical type tag (e.g. `uint256`, `address[]`), used verbatim
    #[serde(rename = "type")]
    pub type_: String,
    /// Source-level type as reported by the compiler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Member parameters for tuple types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,
}

/// Event field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParam {
    /// Field identifier; may be empty
    #[serde(default)]
    pub name: String,
    /// Canonical type tag, used verbatim
    #[serde(rename = "type")]
    pub type_: String,
    /// Whether the field is stored as a log topic
    #[serde(default)]
    pub indexed: bool,
    /// Source-level type as reported by the compiler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Member parameters for tuple types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,
}

/// Descriptor variant without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    /// `"function"`
    Function,
    /// `"constructor"`
    Constructor,
    /// `"event"`
    Event,
}

impl DescriptorKind {
    /// The ABI `type` tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorKind::Function => "function",
            DescriptorKind::Constructor => "constructor",
            DescriptorKind::Event => "event",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Descriptor {
    /// Build a function descriptor with no outputs and no mutability tag
    pub fn function(name: impl Into<DescriptorName>, inputs: Vec<Param>) -> Self {
        Descriptor::Function(FunctionDef {
            name: name.into(),
            inputs,
            outputs: Vec::new(),
            state_mutability: None,
        })
    }

    /// Build an unnamed constructor descriptor
    pub fn constructor(inputs: Vec<Param>) -> Self {
        Descriptor::Constructor(ConstructorDef {
            name: DescriptorName::default(),
            inputs,
            state_mutability: None,
        })
    }

    /// Build a non-anonymous event descriptor
    pub fn event(name: impl Into<DescriptorName>, inputs: Vec<EventParam>) -> Self {
        Descriptor::Event(EventDef { name: name.into(), inputs, anonymous: false })
    }

    /// The descriptor variant
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::Function(_) => DescriptorKind::Function,
            Descriptor::Constructor(_) => DescriptorKind::Constructor,
            Descriptor::Event(_) => DescriptorKind::Event,
        }
    }

    /// The declared name
    pub fn name(&self) -> &DescriptorName {
        match self {
            Descriptor::Function(f) => &f.name,
            Descriptor::Constructor(c) => &c.name,
            Descriptor::Event(e) => &e.name,
        }
    }

    /// Input type tags in declaration order
    pub fn input_types(&self) -> Vec<&str> {
        match self {
            Descriptor::Function(f) => f.inputs.iter().map(|p| p.type_.as_str()).collect(),
            Descriptor::Constructor(c) => c.inputs.iter().map(|p| p.type_.as_str()).collect(),
            Descriptor::Event(e) => e.inputs.iter().map(|p| p.type_.as_str()).collect(),
        }
    }

    /// Number of inputs
    pub fn input_count(&self) -> usize {
        match self {
            Descriptor::Function(f) => f.inputs.len(),
            Descriptor::Constructor(c) => c.inputs.len(),
            Descriptor::Event(e) => e.inputs.len(),
        }
    }

    /// The mutability tag, if the variant carries one
    pub fn state_mutability(&self) -> Option<&str> {
        match self {
            Descriptor::Function(f) => f.state_mutability.as_deref(),
            Descriptor::Constructor(c) => c.state_mutability.as_deref(),
            Descriptor::Event(_) => None,
        }
    }
}

impl Param {
    /// Create a parameter with only a name and a type
    pub fn new(name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self { name: name.into(), type_: type_.into(), internal_type: None, components: None }
    }
}

impl EventParam {
    /// Create an event field with only a name, a type and the indexed flag
    pub fn new(name: impl Into<String>, type_: impl Into<String>, indexed: bool) -> Self {
        Self {
            name: name.into(),
            type_: type_.into(),
            indexed,
            internal_type: None,
            components: None,
        }
    }
}
