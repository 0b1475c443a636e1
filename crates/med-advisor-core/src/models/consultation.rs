//! Consultation and reminder records for callers that keep history.
//!
//! The core never stores these; it only constructs values the serving layer
//! may persist.

use serde::{Deserialize, Serialize};

/// One advisory consultation, ready for the caller to persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    /// Unique consultation ID
    pub id: String,
    /// Symptom text as the user entered it
    pub symptoms: String,
    /// Recommended medicine identifiers
    pub medicines: Vec<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl Consultation {
    /// Create a new consultation record.
    pub fn new(symptoms: String, medicines: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            symptoms,
            medicines,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Serialize for storage or transport.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A medication reminder the caller schedules and stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationReminder {
    /// Unique reminder ID
    pub id: String,
    /// Medicine identifier or display name
    pub medicine: String,
    /// Time of day (e.g., "08:00")
    pub time: String,
    /// Frequency (e.g., "daily", "twice daily")
    pub frequency: String,
    /// Creation timestamp
    pub created_at: String,
}

impl MedicationReminder {
    /// Create a new reminder.
    pub fn new(medicine: String, time: String, frequency: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            medicine,
            time,
            frequency,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
