//! Static clinical reference data.
//!
//! Holds:
//! - Medicine profiles (usage, dosage, precautions, side effects)
//! - Pairwise drug-interaction rules
//! - Severity keyword buckets for triage
//! - Allergy cross-reference (medicine -> known allergen aliases)
//! - Symptom vocabulary and autosuggestion corpus
//! - Emergency contact directory
//!
//! The knowledge base is built once at startup and shared read-only for the
//! process lifetime. All advisory components borrow it; none mutate it.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{InteractionRule, InteractionSeverity, MedicineProfile, SeverityLevel};

/// Minimum fuzzy-match confidence for [`KnowledgeBase::closest_medicine`].
const MIN_MATCH_CONFIDENCE: f64 = 0.65;

/// Shortest query that produces symptom suggestions.
const MIN_SUGGESTION_QUERY: usize = 2;

/// Maximum number of symptom suggestions returned.
const MAX_SUGGESTIONS: usize = 10;

/// Keyword phrases scored per severity bucket.
///
/// Buckets are scored independently; the model does not require a phrase to
/// appear in only one bucket.
#[derive(Debug, Clone, Default)]
pub struct SeverityIndicators {
    severe: Vec<String>,
    moderate: Vec<String>,
    mild: Vec<String>,
}

impl SeverityIndicators {
    /// Keyword phrases for one bucket.
    pub fn keywords(&self, level: SeverityLevel) -> &[String] {
        match level {
            SeverityLevel::Severe => &self.severe,
            SeverityLevel::Moderate => &self.moderate,
            SeverityLevel::Mild => &self.mild,
        }
    }

    fn add(&mut self, level: SeverityLevel, phrase: &str) {
        let bucket = match level {
            SeverityLevel::Severe => &mut self.severe,
            SeverityLevel::Moderate => &mut self.moderate,
            SeverityLevel::Mild => &mut self.mild,
        };
        bucket.push(phrase.to_lowercase());
    }
}

/// Emergency phone directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContacts {
    pub ambulance: String,
    pub police: String,
    pub fire: String,
    pub women_helpline: String,
    pub child_helpline: String,
    pub poison_control: String,
    pub mental_health: String,
    pub covid_helpline: String,
}

/// Read-only clinical reference data shared by all advisory components.
pub struct KnowledgeBase {
    medicines: BTreeMap<String, MedicineProfile>,
    /// Keyed by canonical (sorted) identifier pair; insertion canonicalizes,
    /// so at most one rule exists per unordered pair.
    interactions: HashMap<(String, String), InteractionRule>,
    severity: SeverityIndicators,
    allergy_xref: HashMap<String, Vec<String>>,
    symptoms: Vec<String>,
    suggestion_corpus: Vec<String>,
    contacts: EmergencyContacts,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Create a knowledge base with the built-in reference data.
    pub fn new() -> Self {
        let kb = Self {
            medicines: Self::default_medicines(),
            interactions: Self::default_interactions(),
            severity: Self::default_severity(),
            allergy_xref: Self::default_allergy_xref(),
            symptoms: Self::default_symptoms(),
            suggestion_corpus: Self::default_suggestion_corpus(),
            contacts: Self::default_contacts(),
        };
        tracing::debug!(
            medicines = kb.medicines.len(),
            interactions = kb.interactions.len(),
            "knowledge base loaded"
        );
        kb
    }

    /// Create an empty knowledge base for callers that load their own data.
    pub fn empty() -> Self {
        Self {
            medicines: BTreeMap::new(),
            interactions: HashMap::new(),
            severity: SeverityIndicators::default(),
            allergy_xref: HashMap::new(),
            symptoms: Vec::new(),
            suggestion_corpus: Vec::new(),
            contacts: EmergencyContacts::default(),
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Get a medicine profile by canonical identifier.
    pub fn medicine(&self, id: &str) -> Option<&MedicineProfile> {
        self.medicines.get(id)
    }

    /// All medicine profiles, in identifier order.
    pub fn medicines(&self) -> impl Iterator<Item = &MedicineProfile> {
        self.medicines.values()
    }

    /// Display name for an identifier; falls back to the identifier itself.
    pub fn display_name(&self, id: &str) -> String {
        self.medicines
            .get(id)
            .map(|profile| profile.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Look up the interaction rule for an unordered medicine pair.
    pub fn interaction(&self, a: &str, b: &str) -> Option<&InteractionRule> {
        self.interactions.get(&canonical_pair(a, b))
    }

    /// Keyword phrases for one severity bucket.
    pub fn severity_keywords(&self, level: SeverityLevel) -> &[String] {
        self.severity.keywords(level)
    }

    /// Known allergen aliases for a medicine; empty if none are recorded.
    pub fn allergens(&self, medicine: &str) -> &[String] {
        self.allergy_xref
            .get(medicine)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The known symptom vocabulary.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Emergency contact directory.
    pub fn contacts(&self) -> &EmergencyContacts {
        &self.contacts
    }

    /// Symptom phrases containing the query, for autosuggestion.
    ///
    /// Queries shorter than two characters yield nothing; at most ten
    /// suggestions are returned, in corpus order.
    pub fn suggest_symptoms(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        if query.len() < MIN_SUGGESTION_QUERY {
            return Vec::new();
        }
        self.suggestion_corpus
            .iter()
            .filter(|phrase| phrase.contains(&query))
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }

    /// Best fuzzy match for a possibly misspelled medicine name.
    ///
    /// Returns the profile and its confidence, or nothing when no profile
    /// clears the confidence floor.
    pub fn closest_medicine(&self, query: &str) -> Option<(&MedicineProfile, f64)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.medicines
            .values()
            .map(|profile| {
                let score = fuzzy_match(&query, &profile.id)
                    .max(fuzzy_match(&query, &profile.name.to_lowercase()));
                (profile, score)
            })
            .filter(|(_, score)| *score >= MIN_MATCH_CONFIDENCE)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    // =========================================================================
    // Custom data
    // =========================================================================

    /// Add or replace a medicine profile.
    pub fn add_medicine(&mut self, profile: MedicineProfile) {
        self.medicines.insert(profile.id.clone(), profile);
    }

    /// Add or replace the interaction rule for an unordered pair.
    pub fn add_interaction(&mut self, a: &str, b: &str, rule: InteractionRule) {
        self.interactions.insert(canonical_pair(a, b), rule);
    }

    /// Record known allergen aliases for a medicine.
    pub fn add_allergens(&mut self, medicine: &str, allergens: Vec<String>) {
        self.allergy_xref.insert(medicine.to_lowercase(), allergens);
    }

    /// Add a keyword phrase to a severity bucket.
    pub fn add_severity_keyword(&mut self, level: SeverityLevel, phrase: &str) {
        self.severity.add(level, phrase);
    }

    /// Add a phrase to the known symptom vocabulary.
    pub fn add_symptom(&mut self, phrase: &str) {
        self.symptoms.push(phrase.to_lowercase());
    }

    // =========================================================================
    // Built-in reference data
    // =========================================================================

    fn default_medicines() -> BTreeMap<String, MedicineProfile> {
        let mut map = BTreeMap::new();
        for profile in [
            MedicineProfile {
                id: "paracetamol".into(),
                name: "Paracetamol".into(),
                category: "Analgesic & Antipyretic".into(),
                usage: "Used to treat fever, headache, and body pain".into(),
                dosage: "Adults: 500-1000mg every 4-6 hours (max 4g/day)".into(),
                precautions: vec![
                    "Do not exceed recommended dose".into(),
                    "Avoid alcohol consumption".into(),
                    "Consult doctor if pregnant or breastfeeding".into(),
                    "Not recommended for liver disease patients".into(),
                ],
                side_effects: vec![
                    "Nausea".into(),
                    "Allergic reactions (rare)".into(),
                    "Liver damage (overdose)".into(),
                ],
            },
            MedicineProfile {
                id: "cetirizine".into(),
                name: "Cetirizine".into(),
                category: "Antihistamine".into(),
                usage: "Used to treat allergies, cold, sneezing, and runny nose".into(),
                dosage: "Adults: 10mg once daily".into(),
                precautions: vec![
                    "May cause drowsiness".into(),
                    "Avoid driving after consumption".into(),
                    "Consult doctor if pregnant".into(),
                    "Reduce dose in kidney disease".into(),
                ],
                side_effects: vec![
                    "Drowsiness".into(),
                    "Dry mouth".into(),
                    "Headache".into(),
                    "Fatigue".into(),
                ],
            },
            MedicineProfile {
                id: "azithromycin".into(),
                name: "Azithromycin".into(),
                category: "Antibiotic".into(),
                usage: "Used to treat bacterial infections, cough, and sore throat".into(),
                dosage: "Adults: 500mg once daily for 3-5 days".into(),
                precautions: vec![
                    "Complete the full course".into(),
                    "Take on empty stomach".into(),
                    "Avoid if allergic to macrolides".into(),
                    "Consult doctor for heart conditions".into(),
                ],
                side_effects: vec![
                    "Diarrhea".into(),
                    "Nausea".into(),
                    "Abdominal pain".into(),
                    "Vomiting".into(),
                ],
            },
            MedicineProfile {
                id: "diclofenac".into(),
                name: "Diclofenac".into(),
                category: "NSAID (Anti-inflammatory)".into(),
                usage: "Used to treat swelling, inflammation, and body pain".into(),
                dosage: "Adults: 50mg 2-3 times daily".into(),
                precautions: vec![
                    "Take with food".into(),
                    "Avoid in stomach ulcers".into(),
                    "Not for long-term use without supervision".into(),
                    "Risk of cardiovascular events".into(),
                ],
                side_effects: vec![
                    "Stomach upset".into(),
                    "Heartburn".into(),
                    "Dizziness".into(),
                    "Headache".into(),
                ],
            },
            MedicineProfile {
                id: "aciloc".into(),
                name: "Aciloc (Ranitidine)".into(),
                category: "Antacid".into(),
                usage: "Used to treat acidity and stomach pain".into(),
                dosage: "Adults: 150mg twice daily or 300mg at bedtime".into(),
                precautions: vec![
                    "Take before meals".into(),
                    "Avoid smoking and alcohol".into(),
                    "Consult doctor for kidney disease".into(),
                    "May interact with other medications".into(),
                ],
                side_effects: vec![
                    "Headache".into(),
                    "Dizziness".into(),
                    "Constipation".into(),
                    "Diarrhea".into(),
                ],
            },
        ] {
            map.insert(profile.id.clone(), profile);
        }
        map
    }

    fn default_interactions() -> HashMap<(String, String), InteractionRule> {
        let mut map = HashMap::new();
        let mut add = |a: &str, b: &str, severity, warning: &str, recommendation: &str| {
            map.insert(
                canonical_pair(a, b),
                InteractionRule {
                    severity,
                    warning: warning.into(),
                    recommendation: recommendation.into(),
                },
            );
        };

        add(
            "paracetamol",
            "diclofenac",
            InteractionSeverity::Moderate,
            "Both are pain relievers. Combination may increase risk of liver damage.",
            "Consult doctor before combining these medications",
        );
        add(
            "azithromycin",
            "aciloc",
            InteractionSeverity::Mild,
            "Antacids may reduce absorption of azithromycin.",
            "Take azithromycin 1 hour before or 2 hours after antacid",
        );
        add(
            "diclofenac",
            "aciloc",
            InteractionSeverity::Low,
            "Aciloc can help protect stomach from NSAID side effects.",
            "This combination is often prescribed together",
        );
        add(
            "cetirizine",
            "paracetamol",
            InteractionSeverity::Low,
            "Generally safe to take together for cold and flu symptoms.",
            "No significant interaction, can be taken as prescribed",
        );

        map
    }

    fn default_severity() -> SeverityIndicators {
        let mut indicators = SeverityIndicators::default();
        for phrase in [
            "high fever",
            "severe pain",
            "chest pain",
            "difficulty breathing",
            "persistent vomiting",
            "blood in stool",
            "severe headache",
            "confusion",
        ] {
            indicators.add(SeverityLevel::Severe, phrase);
        }
        for phrase in [
            "moderate fever",
            "persistent cough",
            "body aches",
            "diarrhea",
            "stomach pain",
            "swelling",
            "inflammation",
        ] {
            indicators.add(SeverityLevel::Moderate, phrase);
        }
        for phrase in [
            "mild headache",
            "slight fever",
            "runny nose",
            "sneezing",
            "minor allergy",
            "mild acidity",
        ] {
            indicators.add(SeverityLevel::Mild, phrase);
        }
        indicators
    }

    fn default_allergy_xref() -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert(
            "paracetamol".into(),
            vec!["acetaminophen".into(), "paracetamol allergy".into()],
        );
        map.insert(
            "cetirizine".into(),
            vec!["antihistamine allergy".into(), "hydroxyzine allergy".into()],
        );
        map.insert(
            "azithromycin".into(),
            vec![
                "macrolide antibiotics".into(),
                "erythromycin".into(),
                "clarithromycin".into(),
            ],
        );
        map.insert(
            "diclofenac".into(),
            vec![
                "NSAIDs".into(),
                "aspirin".into(),
                "ibuprofen".into(),
                "naproxen".into(),
            ],
        );
        map.insert(
            "aciloc".into(),
            vec!["ranitidine".into(), "H2 blockers".into()],
        );
        map
    }

    fn default_symptoms() -> Vec<String> {
        [
            "fever",
            "headache",
            "body pain",
            "cold",
            "allergy",
            "sneezing",
            "runny nose",
            "cough",
            "sore throat",
            "bacterial infection",
            "swelling",
            "inflammation",
            "stomach pain",
            "acidity",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_suggestion_corpus() -> Vec<String> {
        [
            "fever",
            "headache",
            "cough",
            "cold",
            "sore throat",
            "body ache",
            "fatigue",
            "nausea",
            "vomiting",
            "diarrhea",
            "stomach pain",
            "chest pain",
            "back pain",
            "dizziness",
            "shortness of breath",
            "runny nose",
            "sneezing",
            "watery eyes",
            "muscle pain",
            "joint pain",
            "chills",
            "sweating",
            "loss of appetite",
            "constipation",
            "bloating",
            "heartburn",
            "rash",
            "itching",
            "swelling",
            "ear ache",
            "toothache",
            "jaw pain",
            "neck pain",
            "shoulder pain",
            "weakness",
            "confusion",
            "insomnia",
            "anxiety",
            "depression",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_contacts() -> EmergencyContacts {
        EmergencyContacts {
            ambulance: "108".into(),
            police: "100".into(),
            fire: "101".into(),
            women_helpline: "1091".into(),
            child_helpline: "1098".into(),
            poison_control: "1800-110-113".into(),
            mental_health: "9152987821".into(),
            covid_helpline: "1075".into(),
        }
    }
}

/// Canonical key for an unordered medicine pair.
fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler handles typos, Levenshtein overall similarity
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}
