//! Drug interaction models.

use serde::{Deserialize, Serialize};

/// Severity of a known drug-drug interaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSeverity {
    Low,
    Mild,
    Moderate,
    Severe,
}

/// A known interaction for an unordered pair of medicines.
///
/// The pair itself is the lookup key in the knowledge base; the key is
/// canonicalized by sorting the two identifiers, so at most one rule exists
/// per unordered pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRule {
    pub severity: InteractionSeverity,
    /// What happens when the two are combined
    pub warning: String,
    /// What the user should do about it
    pub recommendation: String,
}

/// An interaction finding for a specific pair of supplied medicines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionWarning {
    /// The two medicines, in the order they were supplied
    pub medicines: [String; 2],
    pub severity: InteractionSeverity,
    pub warning: String,
    pub recommendation: String,
}
