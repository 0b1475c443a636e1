//! Pairwise drug-interaction lookup.

use crate::kb::KnowledgeBase;
use crate::models::InteractionWarning;

/// Checks supplied medicines against the known interaction table.
pub struct InteractionChecker<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> InteractionChecker<'a> {
    /// Create a new checker over the knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Find every known interaction among the supplied medicines.
    ///
    /// Every unordered pair of input positions is looked up once (the lookup
    /// canonicalizes pair order); pairs with no rule produce no finding, and
    /// fewer than two medicines produce an empty list. Findings carry the
    /// pair in the order it was supplied.
    pub fn check(&self, medicines: &[String]) -> Vec<InteractionWarning> {
        let mut findings = Vec::new();
        for i in 0..medicines.len() {
            for j in (i + 1)..medicines.len() {
                if let Some(rule) = self.kb.interaction(&medicines[i], &medicines[j]) {
                    findings.push(InteractionWarning {
                        medicines: [medicines[i].clone(), medicines[j].clone()],
                        severity: rule.severity,
                        warning: rule.warning.clone(),
                        recommendation: rule.recommendation.clone(),
                    });
                }
            }
        }
        findings
    }
}
