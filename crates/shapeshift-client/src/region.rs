//! Region, host, and endpoint resolution.
//!
//! Resolution intentionally favors a stable, low-surprise default region over
//! exotic correctness: `us-east-1` wins whenever the table carries it, and
//! the fallback walks the table in its (lexicographic) iteration order. This
//! mirrors the observed behavior of the system being reimplemented and is a
//! known approximation for aws-global-style services.

use shapeshift_model::EndpointTable;
use tracing::warn;

/// The preferred default region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Regions considered safe targets for synthesized requests.
///
/// Kept verbatim from the original tooling; resolution does not consult it,
/// but invocations log a warning when they resolve outside it.
pub const SAFE_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-north-1",
    "eu-south-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

/// Whether a region is on the safe list.
#[must_use]
pub fn is_safe_region(region: &str) -> bool {
    SAFE_REGIONS.contains(&region)
}

/// Resolve the region for one invocation.
///
/// Order: explicit override; `us-east-1` when the table has it; otherwise the
/// first table entry, preferring its credential-scope region when it carries
/// one.
#[must_use]
pub fn resolve_region(table: &EndpointTable, requested: Option<&str>) -> String {
    if let Some(region) = requested {
        return region.to_owned();
    }
    if table.get(DEFAULT_REGION).is_some() {
        return DEFAULT_REGION.to_owned();
    }
    if let Some((first_region, entry)) = table.first_entry() {
        if let Some(scope_region) = entry.scope_region() {
            return scope_region.to_owned();
        }
        return first_region.to_owned();
    }
    warn!("endpoint table is empty, falling back to the default region");
    DEFAULT_REGION.to_owned()
}

/// Resolve the host for one invocation.
///
/// Order: explicit override; the first table entry's hostname when the
/// resolved region matches its credential-scope region (the aws-global
/// pattern); the region's own hostname; synthesized
/// `<endpointPrefix>.<region>.amazonaws.com`.
#[must_use]
pub fn resolve_host(
    table: &EndpointTable,
    region: &str,
    endpoint_prefix: &str,
    requested: Option<&str>,
) -> String {
    if let Some(host) = requested {
        return host.to_owned();
    }
    if let Some((_, first)) = table.first_entry() {
        if first.scope_region() == Some(region) {
            if let Some(hostname) = &first.hostname {
                return hostname.clone();
            }
        }
    }
    if let Some(hostname) = table.get(region).and_then(|entry| entry.hostname.as_ref()) {
        return hostname.clone();
    }
    format!("{endpoint_prefix}.{region}.amazonaws.com")
}

/// Resolve the endpoint URL: explicit override, else `https://<host>`.
#[must_use]
pub fn resolve_endpoint(host: &str, requested: Option<&str>) -> String {
    requested.map_or_else(|| format!("https://{host}"), ToOwned::to_owned)
}
