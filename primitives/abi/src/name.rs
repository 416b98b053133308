//! Descriptor names
//!
//! A descriptor's `name` is either a bare identifier or a name that already
//! carries its parameter list. The distinction is made once, when the name is
//! read, so nothing downstream has to inspect the string again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `name` field of an ABI descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DescriptorName {
    /// A bare identifier such as `transfer`
    RawName(String),
    /// A name that is already a signature such as `transfer(address,uint256)`
    FullSignature(String),
}

impl DescriptorName {
    /// The name exactly as it appears in the ABI
    pub fn as_str(&self) -> &str {
        match self {
            DescriptorName::RawName(name) | DescriptorName::FullSignature(name) => name,
        }
    }

    /// Whether the name already carries a parameter list
    ///
    /// Variants constructed directly are checked by content, so a `RawName`
    /// holding `(` still counts as qualified.
    pub fn is_full_signature(&self) -> bool {
        match self {
            DescriptorName::FullSignature(_) => true,
            DescriptorName::RawName(name) => name.contains('('),
        }
    }

    /// Whether the name is empty (constructors usually have no name)
    pub fn is_empty(&self) -> bool { self.as_str().is_empty() }
}

impl Default for DescriptorName {
    fn default() -> Self { DescriptorName::RawName(String::new()) }
}

impl From<String> for DescriptorName {
    fn from(name: String) -> Self {
        if name.contains('(') {
            DescriptorName::FullSignature(name)
        } else {
            DescriptorName::RawName(name)
        }
    }
}

impl From<&str> for DescriptorName {
    fn from(name: &str) -> Self { DescriptorName::from(name.to_string()) }
}

impl From<DescriptorName> for String {
    fn from(name: DescriptorName) -> Self {
        match name {
            DescriptorName::RawName(name) | DescriptorName::FullSignature(name) => name,
        }
    }
}

impl fmt::Display for DescriptorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_detects_signature() {
        assert_eq!(
            DescriptorName::from("transfer"),
            DescriptorName::RawName("transfer".to_string())
        );
        assert_eq!(
            DescriptorName::from("transfer(address,uint256)"),
            DescriptorName::FullSignature("transfer(address,uint256)".to_string())
        );
        // A lone parenthesis is enough to count as qualified
        assert!(DescriptorName::from("(").is_full_signature());
        assert!(!DescriptorName::from("").is_full_signature());
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let name: DescriptorName =
            serde_json::from_str("\"balanceOf(address)\"").expect("name should deserialize");
        assert!(name.is_full_signature());
        assert_eq!(
            serde_json::to_string(&name).expect("name should serialize"),
            "\"balanceOf(address)\""
        );

        let raw: DescriptorName = serde_json::from_str("\"Transfer\"").expect("raw name");
        assert_eq!(raw.to_string(), "Transfer");
    }

    #[test]
    fn test_hand_built_raw_name_with_paren_is_qualified() {
        let name = DescriptorName::RawName("transfer(address,uint256)".to_string());
        assert!(name.is_full_signature());
        assert!(!DescriptorName::RawName("transfer".to_string()).is_full_signature());
    }

    #[test]
    fn test_default_is_empty_raw_name() {
        let name = DescriptorName::default();
        assert!(name.is_empty());
        assert!(!name.is_full_signature());
    }
}
