//! The per-service region endpoint table.

use std::collections::BTreeMap;

/// Credential scope override carried by an endpoint entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CredentialScope {
    /// The region requests to this endpoint are actually signed for.
    #[serde(default)]
    pub region: Option<String>,
}

/// One region's endpoint entry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointEntry {
    /// Explicit hostname, when the default synthesis rule does not apply.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Credential scope override (aws-global style entries carry one).
    #[serde(default)]
    pub credential_scope: Option<CredentialScope>,
}

impl EndpointEntry {
    /// The credential-scope region, if the entry carries one.
    #[must_use]
    pub fn scope_region(&self) -> Option<&str> {
        self.credential_scope.as_ref()?.region.as_deref()
    }
}

/// Region name to endpoint entry, plus the regionalization flag.
///
/// Iteration order is the lexicographic region-name order, which makes the
/// "first entry" fallback in endpoint resolution deterministic regardless of
/// the document's key order.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointTable {
    /// Region entries.
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointEntry>,
    /// Whether the service has per-region endpoints at all.
    #[serde(default)]
    pub is_regionalized: Option<bool>,
}

impl EndpointTable {
    /// Look up one region's entry.
    #[must_use]
    pub fn get(&self, region: &str) -> Option<&EndpointEntry> {
        self.endpoints.get(region)
    }

    /// The first entry in iteration order, used as the fallback for
    /// non-regionalized (aws-global style) services.
    #[must_use]
    pub fn first_entry(&self) -> Option<(&str, &EndpointEntry)> {
        self.endpoints.iter().next().map(|(k, v)| (k.as_str(), v))
    }

    /// All region names in the table.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }
}
