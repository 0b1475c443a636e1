//! Allergy conflict cross-referencing.

use crate::kb::KnowledgeBase;
use crate::models::AllergyConflict;

/// Cross-references candidate medicines against declared allergies.
pub struct AllergyChecker<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> AllergyChecker<'a> {
    /// Create a new checker over the knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Find conflicts between medicines and the user's declared allergies.
    ///
    /// Matching is bidirectional substring containment on lowercased strings,
    /// deliberately loose so "penicillin allergy" matches "penicillin".
    /// Every matching alias emits its own finding; one (medicine, allergy)
    /// pair may therefore appear more than once. Medicines with no recorded
    /// allergens never conflict.
    pub fn check(&self, medicines: &[String], allergies: &[String]) -> Vec<AllergyConflict> {
        let mut conflicts = Vec::new();
        for medicine in medicines {
            let allergens = self.kb.allergens(medicine);
            if allergens.is_empty() {
                continue;
            }
            let display = self.kb.display_name(medicine);
            for allergen in allergens {
                let allergen = allergen.to_lowercase();
                for allergy in allergies {
                    let declared = allergy.to_lowercase();
                    if declared.contains(&allergen) || allergen.contains(&declared) {
                        conflicts.push(AllergyConflict {
                            medicine: display.clone(),
                            allergy: allergy.clone(),
                            warning: format!(
                                "You may be allergic to {} due to {} allergy",
                                display, allergy
                            ),
                        });
                    }
                }
            }
        }
        conflicts
    }
}
