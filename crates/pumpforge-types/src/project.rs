//! Project artifacts produced alongside the token metadata: contract source
//! and branding.

use serde::{Deserialize, Serialize};

/// Source code for the token's smart contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Source language, e.g. `solidity`.
    pub language: String,
    pub source: String,
}

/// Visual identity for the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingKit {
    /// Path or URL of the logo.
    pub logo_ref: String,
    /// Palette as `#rrggbb` strings, primary first.
    pub colors: Vec<String>,
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_kit_serde() {
        let kit = BrandingKit {
            logo_ref: "logo.png".to_string(),
            colors: vec!["#ff0000".to_string(), "#00ff00".to_string()],
            style: "modern".to_string(),
        };
        let json = serde_json::to_value(&kit).unwrap();
        assert_eq!(json["colors"][1], "#00ff00");

        let parsed: BrandingKit = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, kit);
    }
}
