//! Advisory result models: triage verdicts, dosage guidance, allergy findings.

use serde::{Deserialize, Serialize};

/// Overall severity verdict for a symptom narrative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
}

/// Distinct-keyword hit counts per severity bucket.
///
/// Each keyword counts at most once regardless of how often it occurs in the
/// narrative.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityScores {
    pub severe: usize,
    pub moderate: usize,
    pub mild: usize,
}

/// Triage outcome for a free-text symptom narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageReport {
    pub level: SeverityLevel,
    /// Human-readable urgency guidance
    pub urgency: String,
    pub scores: SeverityScores,
}

impl TriageReport {
    /// Check whether the narrative warrants immediate attention.
    pub fn is_urgent(&self) -> bool {
        self.level == SeverityLevel::Severe
    }
}

/// Age band used for dosage policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    Teenager,
    Adult,
    Elderly,
}

impl AgeGroup {
    /// Band for a whole-year age. Infants under 2 fall outside all bands.
    pub fn from_age(age: u32) -> Option<Self> {
        match age {
            0..=1 => None,
            2..=11 => Some(AgeGroup::Child),
            12..=17 => Some(AgeGroup::Teenager),
            18..=64 => Some(AgeGroup::Adult),
            _ => Some(AgeGroup::Elderly),
        }
    }
}

/// Dosage guidance for one medicine and patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DosageAdvice {
    /// Display name of the medicine
    pub medicine: String,
    pub recommendation: String,
    /// Whether the medicine is suitable at this age at all
    pub suitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A conflict between a candidate medicine and a declared allergy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllergyConflict {
    /// Display name of the medicine
    pub medicine: String,
    /// The user-declared allergy string that matched
    pub allergy: String,
    pub warning: String,
}
