//! OpenVEX documents, the default attestation predicate.
//!
//! Only the document shape is modelled here. Statement semantics (which
//! status needs which justification, product identifier formats) belong to
//! the tools that author VEX data.

use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;

/// Predicate type URI for OpenVEX documents.
pub const VEX_TYPE_URI: &str = "https://openvex.dev/ns";

/// Context locator written into new documents.
pub const VEX_CONTEXT: &str = "https://openvex.dev/ns";

/// Author recorded when the caller has not set one.
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Role recorded when the caller has not set one.
pub const DEFAULT_ROLE: &str = "Document Creator";

/// Impact status of a vulnerability on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VexStatus {
    NotAffected,
    Affected,
    Fixed,
    UnderInvestigation,
}

/// Why a product is not affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    ComponentNotPresent,
    VulnerableCodeNotPresent,
    VulnerableCodeNotInExecutePath,
    VulnerableCodeCannotBeControlledByAdversary,
    InlineMitigationsAlreadyExist,
}

/// A single VEX statement: one vulnerability, its products, and a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VexStatement {
    pub vulnerability: String,

    #[serde(default)]
    pub products: Vec<String>,

    pub status: VexStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_statement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_statement: Option<String>,
}

impl VexStatement {
    /// Create a statement with no products.
    pub fn new(vulnerability: impl Into<String>, status: VexStatus) -> Self {
        Self {
            vulnerability: vulnerability.into(),
            products: Vec::new(),
            status,
            justification: None,
            impact_statement: None,
            action_statement: None,
        }
    }

    /// Add a product identifier.
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.products.push(product.into());
        self
    }

    /// Set the justification.
    pub fn justification(mut self, justification: Justification) -> Self {
        self.justification = Some(justification);
        self
    }

    /// Set the impact statement.
    pub fn impact(mut self, text: impl Into<String>) -> Self {
        self.impact_statement = Some(text.into());
        self
    }

    /// Set the action statement.
    pub fn action(mut self, text: impl Into<String>) -> Self {
        self.action_statement = Some(text.into());
        self
    }
}

/// An OpenVEX document.
///
/// Field declaration order is the wire key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VexDocument {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub role: String,

    /// RFC 3339 timestamp. Left unset by default so documents built from
    /// the same inputs encode identically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    pub version: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tooling: String,

    #[serde(default)]
    pub statements: Vec<VexStatement>,
}

impl VexDocument {
    /// A fresh document with default metadata and no statements.
    pub fn new() -> Self {
        Self {
            context: VEX_CONTEXT.to_string(),
            id: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            role: DEFAULT_ROLE.to_string(),
            timestamp: None,
            last_updated: None,
            version: 1,
            tooling: String::new(),
            statements: Vec::new(),
        }
    }

    /// Append a statement.
    pub fn add_statement(&mut self, statement: VexStatement) {
        self.statements.push(statement);
    }
}

impl Default for VexDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicate for VexDocument {
    const PREDICATE_TYPE: &'static str = VEX_TYPE_URI;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_document() {
        let doc = VexDocument::default();
        assert_eq!(doc.context, VEX_CONTEXT);
        assert_eq!(doc.author, DEFAULT_AUTHOR);
        assert_eq!(doc.role, DEFAULT_ROLE);
        assert_eq!(doc.version, 1);
        assert!(doc.statements.is_empty());
        assert!(doc.timestamp.is_none());
    }

    #[test]
    fn test_default_document_wire_shape() {
        let value = serde_json::to_value(VexDocument::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "@context": "https://openvex.dev/ns",
                "author": "Unknown Author",
                "role": "Document Creator",
                "version": 1,
                "statements": []
            })
        );
    }

    #[test]
    fn test_statement_wire_shape() {
        let stmt = VexStatement::new("CVE-2023-1234", VexStatus::NotAffected)
            .product("pkg:oci/app@sha256:abc")
            .justification(Justification::VulnerableCodeNotInExecutePath);
        let value = serde_json::to_value(&stmt).unwrap();
        assert_eq!(
            value,
            json!({
                "vulnerability": "CVE-2023-1234",
                "products": ["pkg:oci/app@sha256:abc"],
                "status": "not_affected",
                "justification": "vulnerable_code_not_in_execute_path"
            })
        );
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc: VexDocument = serde_json::from_value(json!({
            "@context": "https://openvex.dev/ns",
            "version": 2,
            "statements": [
                {"vulnerability": "CVE-9", "status": "affected", "action_statement": "upgrade"}
            ]
        }))
        .unwrap();
        assert_eq!(doc.version, 2);
        assert_eq!(doc.statements[0].status, VexStatus::Affected);
        assert_eq!(doc.statements[0].action_statement.as_deref(), Some("upgrade"));
        assert!(doc.author.is_empty());
    }
}
