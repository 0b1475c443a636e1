//! Symptom-to-medicine rule engine.
//!
//! The ruleset is fixed and small: every rule is evaluated against the whole
//! symptom set and the matching rules' outputs union. Unrecognized symptom
//! phrases match no rule and are silently ignored.

use std::collections::{BTreeSet, HashSet};

/// Builds the recommended medicine set for a symptom set.
pub struct Recommender {
    /// With fever, these escalate to an anti-inflammatory as well
    inflammatory: HashSet<String>,
    /// Without fever, any of these alone indicate an anti-inflammatory
    pain: HashSet<String>,
    cold: HashSet<String>,
    gastric: HashSet<String>,
    infection: HashSet<String>,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender {
    /// Create a recommender with the fixed rule triggers.
    pub fn new() -> Self {
        Self {
            inflammatory: phrase_set(&["inflammation", "swelling"]),
            pain: phrase_set(&["body pain", "headache", "inflammation", "swelling"]),
            cold: phrase_set(&["cold", "allergy", "sneezing", "runny nose"]),
            gastric: phrase_set(&["stomach pain", "acidity"]),
            infection: phrase_set(&["cough", "bacterial infection", "sore throat"]),
        }
    }

    /// Recommend medicines for a set of lowercase, trimmed symptom phrases.
    ///
    /// Pure: the same input set always yields the same output set, and the
    /// output is independent of any ordering or duplication in how the input
    /// set was assembled.
    pub fn recommend(&self, symptoms: &BTreeSet<String>) -> BTreeSet<String> {
        let mut recommended = BTreeSet::new();
        let any = |triggers: &HashSet<String>| symptoms.iter().any(|s| triggers.contains(s));

        if symptoms.contains("fever") {
            recommended.insert("paracetamol".to_string());
            if any(&self.inflammatory) {
                recommended.insert("diclofenac".to_string());
            }
        }
        if !symptoms.contains("fever") && any(&self.pain) {
            recommended.insert("diclofenac".to_string());
        }
        if any(&self.cold) {
            recommended.insert("cetirizine".to_string());
        }
        if any(&self.gastric) {
            recommended.insert("aciloc".to_string());
        }
        if any(&self.infection) {
            recommended.insert("azithromycin".to_string());
        }

        recommended
    }
}

/// Split a free-text symptom list ("fever, body pain") into the lowercase,
/// trimmed phrase set the recommender expects.
pub fn symptom_set(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|phrase| phrase.trim().to_lowercase())
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

fn phrase_set(phrases: &[&str]) -> HashSet<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}
