//! The router: picks the primary verification procedure and decides whether
//! the generalist fallback also runs.
//!
//! Routing algorithm:
//!
//! 1. Resolve the classifier label into a `Domain` (unknown → `General`).
//! 2. Evaluate the claim with the domain's primary procedure.
//! 3. A fallback is *needed* when the domain confidence is strictly below
//!    `fallback_threshold`, or the primary verdict is `uncertain`
//!    (`unsupported` too, when `fallback_on_unsupported` is set).
//! 4. The fallback *runs* only if it is needed and the primary procedure is
//!    not itself the generalist. The generalist never falls back to itself.
//! 5. Results are returned in call order: primary, then fallback.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use groundzero_contracts::{
    claim::{DomainClassification, StructuredClaim},
    error::{GroundZeroError, GroundZeroResult},
    routing::{Domain, FallbackTrigger, RoutingDecision},
    verdict::{OracleCallResult, Verdict},
};

use crate::traits::Oracle;

/// Domain confidence below which the generalist fallback runs.
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.6;

/// Tunable routing constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Fallback runs when domain confidence is strictly below this value.
    pub fallback_threshold: f64,
    /// Whether an `unsupported` primary verdict also triggers the fallback.
    pub fallback_on_unsupported: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            fallback_on_unsupported: false,
        }
    }
}

/// One verification procedure per `Domain`, plus the generalist.
///
/// The generalist procedure doubles as the `General` domain's primary and as
/// the fallback for every other domain.
pub struct OracleRegistry {
    finance: Box<dyn Oracle>,
    tech_release: Box<dyn Oracle>,
    generalist: Box<dyn Oracle>,
}

impl OracleRegistry {
    /// Build a registry.
    ///
    /// Returns `GroundZeroError::DuplicateOracleName` if two procedures share
    /// a name, since results are told apart by name alone.
    pub fn new(
        finance: Box<dyn Oracle>,
        tech_release: Box<dyn Oracle>,
        generalist: Box<dyn Oracle>,
    ) -> GroundZeroResult<Self> {
        let names = [finance.name(), tech_release.name(), generalist.name()];
        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(GroundZeroError::DuplicateOracleName {
                    name: name.to_string(),
                });
            }
        }

        Ok(Self {
            finance,
            tech_release,
            generalist,
        })
    }

    /// The primary procedure for `domain`.
    pub fn primary(&self, domain: Domain) -> &dyn Oracle {
        match domain {
            Domain::Finance => self.finance.as_ref(),
            Domain::TechRelease => self.tech_release.as_ref(),
            Domain::General => self.generalist.as_ref(),
        }
    }

    /// The generalist fallback procedure.
    pub fn generalist(&self) -> &dyn Oracle {
        self.generalist.as_ref()
    }
}

/// Routes one claim to its primary procedure and, when warranted, the
/// generalist fallback.
pub struct Router {
    registry: OracleRegistry,
    config: RouterConfig,
}

impl Router {
    pub fn new(registry: OracleRegistry, config: RouterConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route `claim` and return the decision plus every result produced.
    ///
    /// The result list has length 1 or 2; the fallback, when present, is
    /// always second. Never fails: procedures report missing data through
    /// their verdicts.
    pub fn route(
        &self,
        domain: &DomainClassification,
        claim: &StructuredClaim,
    ) -> (RoutingDecision, Vec<OracleCallResult>) {
        let resolved = Domain::from_label(&domain.domain);
        let primary = self.registry.primary(resolved);

        debug!(
            domain_label = %domain.domain,
            domain_confidence = domain.confidence,
            resolved_domain = %resolved,
            primary_oracle = primary.name(),
            "routing claim"
        );

        let primary_result = primary.evaluate(claim);
        let trigger = match resolved {
            Domain::General => None,
            Domain::Finance | Domain::TechRelease => {
                self.fallback_trigger(domain.confidence, primary_result.verdict())
            }
        };

        let mut results = vec![primary_result];
        let mut fallback_oracle = None;

        if let Some(trigger) = trigger {
            let fallback = self.registry.generalist();
            info!(
                primary_oracle = primary.name(),
                fallback_oracle = fallback.name(),
                trigger = ?trigger,
                "invoking fallback oracle"
            );
            results.push(fallback.evaluate(claim));
            fallback_oracle = Some(fallback.name().to_string());
        }

        let decision = RoutingDecision {
            domain_label: domain.domain.clone(),
            domain: resolved,
            primary_oracle: primary.name().to_string(),
            fallback_used: trigger.is_some(),
            fallback_oracle,
            fallback_trigger: trigger,
        };

        debug!(
            primary_oracle = %decision.primary_oracle,
            fallback_used = decision.fallback_used,
            "routing decision recorded"
        );

        (decision, results)
    }

    /// Which fallback condition holds, if any. Low confidence is reported
    /// first when both hold.
    fn fallback_trigger(&self, domain_confidence: f64, primary: Verdict) -> Option<FallbackTrigger> {
        if domain_confidence < self.config.fallback_threshold {
            return Some(FallbackTrigger::LowDomainConfidence);
        }

        let inconclusive = match primary {
            Verdict::Uncertain => true,
            Verdict::Unsupported => self.config.fallback_on_unsupported,
            Verdict::LikelyTrue | Verdict::LikelyFalse => false,
        };
        inconclusive.then_some(FallbackTrigger::InconclusivePrimary)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
