//! Medicine reference profiles.

use serde::{Deserialize, Serialize};

/// A single medicine in the advisory knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineProfile {
    /// Canonical lowercase identifier (e.g., "paracetamol")
    pub id: String,
    /// Display name
    pub name: String,
    /// Therapeutic category (e.g., "Antihistamine")
    pub category: String,
    /// What the medicine treats
    pub usage: String,
    /// Standard adult dosage text
    pub dosage: String,
    /// Precautions, in display order
    pub precautions: Vec<String>,
    /// Known side effects, in display order
    pub side_effects: Vec<String>,
}

impl MedicineProfile {
    /// Create a new profile with required fields.
    pub fn new(id: String, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            usage: String::new(),
            dosage: String::new(),
            precautions: Vec::new(),
            side_effects: Vec::new(),
        }
    }
}
