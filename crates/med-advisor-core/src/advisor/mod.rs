//! Advisory components over the knowledge base.
//!
//! Pipeline: Symptoms/Medicines/Allergies/Age -> independent pure checks -> advisory results
//!
//! Each component is a pure function of its inputs and the injected
//! read-only [`KnowledgeBase`]; the [`Advisor`] facade wires them together
//! without adding semantics of its own.

mod allergy;
mod dosage;
mod interactions;
mod recommender;
mod triage;

pub use allergy::*;
pub use dosage::*;
pub use interactions::*;
pub use recommender::*;
pub use triage::*;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::kb::KnowledgeBase;
use crate::models::{
    AllergyConflict, DosageAdvice, InteractionWarning, MedicineProfile, TriageReport,
};

/// Advisory errors.
///
/// Empty findings (no matched rules, no interactions, no conflicts) are valid
/// results, never errors; only unknown direct lookups and precondition
/// violations surface here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("unknown medicine: {0}")]
    UnknownMedicine(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Facade coordinating all advisory components.
pub struct Advisor<'a> {
    kb: &'a KnowledgeBase,
    recommender: Recommender,
    interactions: InteractionChecker<'a>,
    triage: TriageAssessor<'a>,
    allergies: AllergyChecker<'a>,
    dosage: DosageCalculator<'a>,
}

impl<'a> Advisor<'a> {
    /// Create a new advisor over the knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self {
            kb,
            recommender: Recommender::new(),
            interactions: InteractionChecker::new(kb),
            triage: TriageAssessor::new(kb),
            allergies: AllergyChecker::new(kb),
            dosage: DosageCalculator::new(kb),
        }
    }

    /// Recommend medicines for a set of lowercase, trimmed symptom phrases.
    pub fn recommend(&self, symptoms: &BTreeSet<String>) -> BTreeSet<String> {
        self.recommender.recommend(symptoms)
    }

    /// Find every known interaction among the supplied medicines.
    pub fn check_interactions(&self, medicines: &[String]) -> Vec<InteractionWarning> {
        self.interactions.check(medicines)
    }

    /// Assess severity of a free-text symptom narrative.
    pub fn assess_severity(&self, narrative: &str) -> TriageReport {
        self.triage.assess(narrative)
    }

    /// Find conflicts between medicines and declared allergies.
    pub fn check_allergies(
        &self,
        medicines: &[String],
        allergies: &[String],
    ) -> Vec<AllergyConflict> {
        self.allergies.check(medicines, allergies)
    }

    /// Calculate dosage guidance for one medicine, age, and weight.
    pub fn calculate_dosage(
        &self,
        medicine: &str,
        age: u32,
        weight: f64,
    ) -> AdvisorResult<DosageAdvice> {
        self.dosage.calculate(medicine, age, weight)
    }

    /// Get the full profile for a medicine identifier.
    pub fn medicine_info(&self, id: &str) -> AdvisorResult<&MedicineProfile> {
        self.kb.medicine(id).ok_or_else(|| {
            tracing::debug!(medicine = id, "medicine info lookup miss");
            AdvisorError::UnknownMedicine(id.to_string())
        })
    }

    /// Get the recommender for direct access.
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Get the triage assessor for direct access.
    pub fn triage(&self) -> &TriageAssessor<'a> {
        &self.triage
    }
}
