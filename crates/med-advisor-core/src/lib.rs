//! Med-Advisor Core Library
//!
//! Rule-based symptom-to-medicine advisory: medicine recommendations,
//! pairwise interaction warnings, severity triage, allergy conflict checks,
//! and age-banded dosage guidance.
//!
//! # Architecture
//!
//! ```text
//! Symptom set ────────► Recommender ────────┐
//! Medicine list ──────► InteractionChecker ─┤
//! Narrative ──────────► TriageAssessor ─────┼──► JSON-serializable results
//! Medicines+Allergies ► AllergyChecker ─────┤
//! Medicine+Age+Weight ► DosageCalculator ───┘
//!                 (all borrow one read-only KnowledgeBase)
//! ```
//!
//! # Core Principle
//!
//! **Advisory, not authoritative.** Unrecognized symptoms, medicines, and
//! allergy strings degrade gracefully to "no finding"; only direct lookups of
//! unknown medicines and malformed numeric input are errors.
//!
//! Every component is a pure function of its inputs and an immutable
//! [`KnowledgeBase`] built once at startup, so concurrent calls need no
//! coordination and identical inputs always produce identical results.
//!
//! # Modules
//!
//! - [`kb`]: static clinical reference data
//! - [`models`]: domain types (profiles, warnings, reports, records)
//! - [`advisor`]: the advisory components and the [`Advisor`] facade

pub mod advisor;
pub mod kb;
pub mod models;

// Re-export commonly used types
pub use advisor::{
    symptom_set, Advisor, AdvisorError, AdvisorResult, AllergyChecker, DosageCalculator,
    InteractionChecker, Recommender, TriageAssessor,
};
pub use kb::{EmergencyContacts, KnowledgeBase};
pub use models::{
    AgeGroup, AllergyConflict, Consultation, DosageAdvice, InteractionRule, InteractionSeverity,
    InteractionWarning, MedicationReminder, MedicineProfile, SeverityLevel, SeverityScores,
    TriageReport,
};
