//! Classifier contract and prediction ranking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Probability a label must strictly exceed to be recommended.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Prediction errors.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("shape mismatch: {labels} labels but {probabilities} probabilities")]
    ShapeMismatch { labels: usize, probabilities: usize },

    #[error("inference error: {0}")]
    Inference(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type PredictResult<T> = Result<T, PredictError>;

/// A black-box symptom classifier.
///
/// Implementations receive a lowercased, trimmed symptom narrative and
/// return one probability per label, aligned to [`labels`](Self::labels)
/// order.
pub trait SymptomClassifier {
    /// Ordered medicine labels the probability vector aligns to.
    fn labels(&self) -> &[String];

    /// Probability per label for the given narrative.
    fn predict(&self, symptoms: &str) -> PredictResult<Vec<f64>>;
}

/// A medicine the classifier recommends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicinePrediction {
    /// Lowercase medicine identifier
    pub name: String,
    /// Percent confidence (probability x 100)
    pub confidence: f64,
}

/// Run the classifier on a symptom narrative and rank its output.
///
/// The narrative is trimmed and lowercased before inference; an empty
/// narrative is invalid input. Labels with probability strictly above
/// [`CONFIDENCE_THRESHOLD`] are kept, scored as percent confidence, and
/// sorted descending; the sort is stable so ties keep label order.
pub fn predict_medicines<C>(
    classifier: &C,
    symptoms: &str,
) -> PredictResult<Vec<MedicinePrediction>>
where
    C: SymptomClassifier + ?Sized,
{
    let narrative = symptoms.trim().to_lowercase();
    if narrative.is_empty() {
        return Err(PredictError::InvalidInput(
            "symptoms must not be empty".into(),
        ));
    }

    let probabilities = classifier.predict(&narrative)?;
    let labels = classifier.labels();
    if probabilities.len() != labels.len() {
        return Err(PredictError::ShapeMismatch {
            labels: labels.len(),
            probabilities: probabilities.len(),
        });
    }

    let mut predictions: Vec<MedicinePrediction> = labels
        .iter()
        .zip(probabilities.iter())
        .filter(|(_, probability)| **probability > CONFIDENCE_THRESHOLD)
        .map(|(label, probability)| MedicinePrediction {
            name: label.to_lowercase(),
            confidence: probability * 100.0,
        })
        .collect();
    predictions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(predictions)
}

/// Parse a JSON array of medicine labels (the label artifact shipped
/// alongside a trained model).
pub fn parse_labels(json: &str) -> PredictResult<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}
