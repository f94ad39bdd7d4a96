//! Domain resolution and the routing record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::verdict::OracleCallResult;

/// The closed set of domains the router can dispatch to.
///
/// Adding a domain means adding a variant here; every `match` over `Domain`
/// then fails to compile until the new domain is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Finance,
    TechRelease,
    General,
}

impl Domain {
    /// Resolve a classifier label. Unknown labels degrade to `General`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "finance" => Domain::Finance,
            "tech_release" => Domain::TechRelease,
            _ => Domain::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Finance => "finance",
            Domain::TechRelease => "tech_release",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the generalist fallback ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTrigger {
    /// The domain classifier's confidence was below the routing threshold.
    LowDomainConfidence,
    /// The primary procedure returned an inconclusive verdict.
    InconclusivePrimary,
}

/// How one claim was routed. Created once by the router, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// The domain label exactly as the classifier produced it.
    pub domain_label: String,
    /// The domain the label resolved to.
    pub domain: Domain,
    pub primary_oracle: String,
    pub fallback_used: bool,
    /// Present only when `fallback_used` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_oracle: Option<String>,
    /// Present only when `fallback_used` is true. Low confidence wins when
    /// both conditions hold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_trigger: Option<FallbackTrigger>,
}

/// Routing output without aggregation: the decision plus every procedure
/// result in call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedClaim {
    pub results: Vec<OracleCallResult>,
    pub routing: RoutingDecision,
}
