use crate::types::{Finding, Report};
use std::sync::Arc;

/// Scoring policy applied by the critic to a run's findings.
///
/// Implement this to plug in a richer validation (source credibility,
/// contradiction checks, recency) without touching the orchestrator.
pub trait ScoringPolicy: Send + Sync {
    fn score(&self, findings: &[Finding]) -> Report;
}

/// Confidence of 0.9 whenever anything was found, 0.0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresencePolicy;

impl PresencePolicy {
    pub const FOUND: f64 = 0.9;
    pub const EMPTY: f64 = 0.0;
}

impl ScoringPolicy for PresencePolicy {
    fn score(&self, findings: &[Finding]) -> Report {
        Report {
            confidence_score: if findings.is_empty() {
                Self::EMPTY
            } else {
                Self::FOUND
            },
            issues_found: Vec::new(),
        }
    }
}

impl<F> ScoringPolicy for F
where
    F: Fn(&[Finding]) -> Report + Send + Sync,
{
    fn score(&self, findings: &[Finding]) -> Report {
        self(findings)
    }
}

/// Critic agent
pub struct Critic {
    policy: Arc<dyn ScoringPolicy>,
}

impl Default for Critic {
    fn default() -> Self {
        Self::new(Arc::new(PresencePolicy))
    }
}

impl Critic {
    pub fn new(policy: Arc<dyn ScoringPolicy>) -> Self {
        Self { policy }
    }

    /// Score the entire findings sequence of a run
    pub fn validate_findings(&self, findings: &[Finding]) -> Report {
        let report = self.policy.score(findings);
        tracing::info!(
            confidence = report.confidence_score,
            issues = report.issues_found.len(),
            findings = findings.len(),
            "findings validated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_policy_scores() {
        let critic = Critic::default();

        let empty = critic.validate_findings(&[]);
        assert_eq!(empty.confidence_score, 0.0);
        assert!(empty.issues_found.is_empty());

        let report = critic.validate_findings(&[Finding::error("x")]);
        assert_eq!(report.confidence_score, 0.9);
        assert!(report.issues_found.is_empty());
    }

    #[test]
    fn test_custom_policy_is_used() {
        let critic = Critic::new(Arc::new(|findings: &[Finding]| Report {
            confidence_score: 0.5,
            issues_found: findings
                .iter()
                .filter(|f| f.is_error())
                .map(|_| "tool failure".to_string())
                .collect(),
        }));

        let report = critic.validate_findings(&[Finding::error("a"), Finding::error("b")]);
        assert_eq!(report.confidence_score, 0.5);
        assert_eq!(report.issues_found.len(), 2);
    }
}
