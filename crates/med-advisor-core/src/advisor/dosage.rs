//! Age-banded dosage guidance.

use crate::kb::KnowledgeBase;
use crate::models::{AgeGroup, DosageAdvice};

use super::{AdvisorError, AdvisorResult};

/// Weight-based child dose factor for paracetamol, mg per kg.
const PARACETAMOL_CHILD_MG_PER_KG: f64 = 10.0;

/// Produces dosage guidance per medicine, age, and weight.
pub struct DosageCalculator<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> DosageCalculator<'a> {
    /// Create a new calculator over the knowledge base.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Calculate dosage guidance.
    ///
    /// Age is whole years. Weight (kg) is only consulted for the weight-based
    /// child paracetamol dose; it is accepted and ignored for every other
    /// band and medicine. Unknown medicines are an error; infants are a
    /// valid not-suitable result.
    pub fn calculate(&self, medicine: &str, age: u32, weight: f64) -> AdvisorResult<DosageAdvice> {
        if !weight.is_finite() || weight < 0.0 {
            tracing::warn!(weight, "rejected non-finite or negative weight");
            return Err(AdvisorError::InvalidInput(format!(
                "weight must be a non-negative number, got {}",
                weight
            )));
        }
        let profile = self
            .kb
            .medicine(medicine)
            .ok_or_else(|| AdvisorError::UnknownMedicine(medicine.to_string()))?;

        let group = AgeGroup::from_age(age);
        let advice = match group {
            None => DosageAdvice {
                medicine: profile.name.clone(),
                recommendation: "Consult pediatrician - Not recommended for infants".into(),
                suitable: false,
                age_group: None,
                note: None,
            },
            Some(AgeGroup::Child) => {
                let recommendation = if profile.id == "paracetamol" {
                    format!(
                        "{:.0}mg every 4-6 hours (max 4 doses/day)",
                        weight * PARACETAMOL_CHILD_MG_PER_KG
                    )
                } else if profile.id == "cetirizine" {
                    "5mg once daily".into()
                } else {
                    "Consult pediatrician for appropriate child dosage".into()
                };
                DosageAdvice {
                    medicine: profile.name.clone(),
                    recommendation,
                    suitable: true,
                    age_group: group,
                    note: None,
                }
            }
            Some(AgeGroup::Teenager) | Some(AgeGroup::Adult) => DosageAdvice {
                medicine: profile.name.clone(),
                recommendation: profile.dosage.clone(),
                suitable: true,
                age_group: group,
                note: None,
            },
            Some(AgeGroup::Elderly) => DosageAdvice {
                medicine: profile.name.clone(),
                recommendation: format!("{} (May need adjustment for elderly)", profile.dosage),
                suitable: true,
                age_group: group,
                note: Some("Consult doctor for elderly-specific dosing".into()),
            },
        };

        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infant_not_suitable() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("paracetamol", 1, 10.0).unwrap();
        assert!(!advice.suitable);
        assert_eq!(advice.age_group, None);
        assert!(advice.recommendation.contains("pediatrician"));
    }

    #[test]
    fn test_child_paracetamol_is_weight_based() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("paracetamol", 8, 20.0).unwrap();
        assert!(advice.suitable);
        assert_eq!(advice.age_group, Some(AgeGroup::Child));
        assert_eq!(
            advice.recommendation,
            "200mg every 4-6 hours (max 4 doses/day)"
        );
    }

    #[test]
    fn test_child_dose_rounds_to_whole_milligrams() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("paracetamol", 5, 17.3).unwrap();
        assert!(advice.recommendation.starts_with("173mg"));
    }

    #[test]
    fn test_child_cetirizine_is_fixed() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("cetirizine", 8, 20.0).unwrap();
        assert_eq!(advice.recommendation, "5mg once daily");
        assert!(advice.suitable);
    }

    #[test]
    fn test_child_other_medicines_defer_to_pediatrician() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("diclofenac", 8, 20.0).unwrap();
        assert_eq!(
            advice.recommendation,
            "Consult pediatrician for appropriate child dosage"
        );
        assert!(advice.suitable);
        assert_eq!(advice.age_group, Some(AgeGroup::Child));
    }

    #[test]
    fn test_teenager_and_adult_use_standard_dosage() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);
        let standard = kb.medicine("paracetamol").unwrap().dosage.clone();

        let teen = calculator.calculate("paracetamol", 15, 55.0).unwrap();
        assert_eq!(teen.recommendation, standard);
        assert_eq!(teen.age_group, Some(AgeGroup::Teenager));

        let adult = calculator.calculate("paracetamol", 40, 80.0).unwrap();
        assert_eq!(adult.recommendation, standard);
        assert_eq!(adult.age_group, Some(AgeGroup::Adult));
        assert_eq!(adult.note, None);
    }

    #[test]
    fn test_weight_ignored_outside_child_paracetamol() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let light = calculator.calculate("paracetamol", 40, 50.0).unwrap();
        let heavy = calculator.calculate("paracetamol", 40, 120.0).unwrap();
        assert_eq!(light, heavy);
    }

    #[test]
    fn test_elderly_gets_adjustment_suffix_and_note() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("cetirizine", 70, 60.0).unwrap();
        assert_eq!(advice.age_group, Some(AgeGroup::Elderly));
        assert_eq!(
            advice.recommendation,
            "Adults: 10mg once daily (May need adjustment for elderly)"
        );
        assert_eq!(
            advice.note.as_deref(),
            Some("Consult doctor for elderly-specific dosing")
        );
    }

    #[test]
    fn test_unknown_medicine_is_an_error() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let result = calculator.calculate("unobtainium", 30, 70.0);
        assert!(matches!(result, Err(AdvisorError::UnknownMedicine(_))));
    }

    #[test]
    fn test_invalid_weight_is_an_error() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        assert!(matches!(
            calculator.calculate("paracetamol", 30, -1.0),
            Err(AdvisorError::InvalidInput(_))
        ));
        assert!(matches!(
            calculator.calculate("paracetamol", 30, f64::NAN),
            Err(AdvisorError::InvalidInput(_))
        ));

        // Invalid input is reported before the medicine lookup
        assert!(matches!(
            calculator.calculate("unobtainium", 30, -1.0),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_weight_is_accepted() {
        let kb = KnowledgeBase::new();
        let calculator = DosageCalculator::new(&kb);

        let advice = calculator.calculate("paracetamol", 8, 0.0).unwrap();
        assert!(advice.recommendation.starts_with("0mg"));
    }
}
