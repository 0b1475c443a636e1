//! Deterministic keyword classifier for tests and model-free operation.

use crate::classifier::{PredictResult, SymptomClassifier};

/// Probability assigned when any keyword for a label is present.
const HIT_PROBABILITY: f64 = 0.9;

/// Probability assigned when no keyword for a label is present.
const MISS_PROBABILITY: f64 = 0.05;

/// Keyword-driven classifier over the built-in medicine labels.
///
/// Stands in for a trained model: each label fires on the symptom family it
/// treats, with fixed probabilities, so prediction consumption can be
/// exercised without any model artifacts.
pub struct MockClassifier {
    labels: Vec<String>,
    keywords: Vec<Vec<&'static str>>,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    /// Create a classifier over the built-in labels.
    pub fn new() -> Self {
        let (labels, keywords): (Vec<_>, Vec<_>) = [
            ("paracetamol", vec!["fever"]),
            ("cetirizine", vec!["cold", "allergy", "sneezing", "runny nose"]),
            (
                "azithromycin",
                vec!["cough", "sore throat", "bacterial infection"],
            ),
            ("diclofenac", vec!["body pain", "inflammation", "swelling"]),
            ("aciloc", vec!["stomach pain", "acidity"]),
        ]
        .into_iter()
        .map(|(label, keywords)| (label.to_string(), keywords))
        .unzip();

        Self { labels, keywords }
    }
}

impl SymptomClassifier for MockClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict(&self, symptoms: &str) -> PredictResult<Vec<f64>> {
        Ok(self
            .keywords
            .iter()
            .map(|family| {
                if family.iter().any(|keyword| symptoms.contains(keyword)) {
                    HIT_PROBABILITY
                } else {
                    MISS_PROBABILITY
                }
            })
            .collect())
    }
}
