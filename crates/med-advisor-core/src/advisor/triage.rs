//! Severity triage over free-text symptom narratives.

use crate::kb::KnowledgeBase;
use crate::models::{SeverityLevel, SeverityScores, TriageReport};

/// Scores a narrative against the severity keyword buckets.
pub struct TriageAssessor<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> TriageAssessor<'a> {
    /// Create a new assessor over the knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Assess a symptom narrative.
    ///
    /// Each bucket's score is the number of its distinct keyword phrases
    /// occurring in the lowercased narrative; repeated occurrences of one
    /// phrase still count once. The verdict checks buckets in fixed
    /// priority: any severe hit wins outright, moderate must strictly exceed
    /// mild, and a tie (including zero-zero) stays mild.
    pub fn assess(&self, narrative: &str) -> TriageReport {
        let text = narrative.to_lowercase();
        let hits = |level: SeverityLevel| {
            self.kb
                .severity_keywords(level)
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .count()
        };

        let scores = SeverityScores {
            severe: hits(SeverityLevel::Severe),
            moderate: hits(SeverityLevel::Moderate),
            mild: hits(SeverityLevel::Mild),
        };

        let (level, urgency) = if scores.severe > 0 {
            (SeverityLevel::Severe, "Seek immediate medical attention")
        } else if scores.moderate > scores.mild {
            (SeverityLevel::Moderate, "Consult a doctor soon")
        } else {
            (
                SeverityLevel::Mild,
                "Self-care with OTC medication may be sufficient",
            )
        };

        TriageReport {
            level,
            urgency: urgency.to_string(),
            scores,
        }
    }
}
