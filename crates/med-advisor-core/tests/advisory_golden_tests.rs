//! Golden tests for the advisory components.
//!
//! These tests pin the rule outcomes for known symptom, interaction, allergy,
//! and dosage cases.

use anyhow::Result;
use med_advisor_core::{
    symptom_set, Advisor, Consultation, InteractionSeverity, KnowledgeBase, SeverityLevel,
};

/// Recommendation case: comma-separated symptoms in, medicine set out.
struct RecommendationCase {
    id: &'static str,
    symptoms: &'static str,
    expected: &'static [&'static str],
}

fn recommendation_cases() -> Vec<RecommendationCase> {
    vec![
        RecommendationCase {
            id: "fever-alone",
            symptoms: "fever",
            expected: &["paracetamol"],
        },
        RecommendationCase {
            id: "fever-body-pain",
            symptoms: "fever, body pain",
            expected: &["paracetamol"],
        },
        RecommendationCase {
            id: "fever-headache",
            symptoms: "fever, headache",
            expected: &["paracetamol"],
        },
        RecommendationCase {
            id: "fever-body-pain-headache",
            symptoms: "fever, body pain, headache",
            expected: &["paracetamol"],
        },
        RecommendationCase {
            id: "fever-inflammation",
            symptoms: "fever, inflammation",
            expected: &["paracetamol", "diclofenac"],
        },
        RecommendationCase {
            id: "fever-swelling-cough",
            symptoms: "fever, swelling, cough",
            expected: &["paracetamol", "diclofenac", "azithromycin"],
        },
        RecommendationCase {
            id: "headache-alone",
            symptoms: "headache",
            expected: &["diclofenac"],
        },
        RecommendationCase {
            id: "body-pain-swelling",
            symptoms: "body pain, swelling",
            expected: &["diclofenac"],
        },
        RecommendationCase {
            id: "cold-sneezing",
            symptoms: "cold, sneezing",
            expected: &["cetirizine"],
        },
        RecommendationCase {
            id: "allergy-alone",
            symptoms: "allergy",
            expected: &["cetirizine"],
        },
        RecommendationCase {
            id: "stomach-pain",
            symptoms: "stomach pain",
            expected: &["aciloc"],
        },
        RecommendationCase {
            id: "acidity-runny-nose",
            symptoms: "acidity, runny nose",
            expected: &["aciloc", "cetirizine"],
        },
        RecommendationCase {
            id: "bacterial-infection",
            symptoms: "bacterial infection",
            expected: &["azithromycin"],
        },
        RecommendationCase {
            id: "sore-throat-cough",
            symptoms: "sore throat, cough",
            expected: &["azithromycin"],
        },
        RecommendationCase {
            id: "four-families",
            symptoms: "fever, cold, stomach pain, cough",
            expected: &["paracetamol", "cetirizine", "aciloc", "azithromycin"],
        },
        RecommendationCase {
            id: "empty",
            symptoms: "",
            expected: &[],
        },
        RecommendationCase {
            id: "unknown-symptoms",
            symptoms: "brain freeze, stubbed toe",
            expected: &[],
        },
    ]
}

#[test]
fn test_recommendation_golden_cases() {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    for case in recommendation_cases() {
        let recommended = advisor.recommend(&symptom_set(case.symptoms));
        let expected: std::collections::BTreeSet<String> =
            case.expected.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            recommended, expected,
            "Case {}: recommendation mismatch",
            case.id
        );
    }
}

/// Triage case: narrative in, severity level out.
struct TriageCase {
    id: &'static str,
    narrative: &'static str,
    expected: SeverityLevel,
}

fn triage_cases() -> Vec<TriageCase> {
    vec![
        TriageCase {
            id: "severe-beats-mild",
            narrative: "high fever and mild headache",
            expected: SeverityLevel::Severe,
        },
        TriageCase {
            id: "chest-pain",
            narrative: "sudden chest pain while climbing stairs",
            expected: SeverityLevel::Severe,
        },
        TriageCase {
            id: "blood-in-stool",
            narrative: "noticed blood in stool this morning",
            expected: SeverityLevel::Severe,
        },
        TriageCase {
            id: "two-moderates",
            narrative: "persistent cough and diarrhea for two days",
            expected: SeverityLevel::Moderate,
        },
        TriageCase {
            id: "single-moderate",
            narrative: "swelling around the knee",
            expected: SeverityLevel::Moderate,
        },
        TriageCase {
            id: "mild-only",
            narrative: "mild headache",
            expected: SeverityLevel::Mild,
        },
        TriageCase {
            id: "two-milds",
            narrative: "runny nose and sneezing",
            expected: SeverityLevel::Mild,
        },
        TriageCase {
            id: "moderate-mild-tie",
            narrative: "inflammation and minor allergy",
            expected: SeverityLevel::Mild,
        },
        TriageCase {
            id: "no-keywords",
            narrative: "feeling generally fine",
            expected: SeverityLevel::Mild,
        },
    ]
}

#[test]
fn test_triage_golden_cases() {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    for case in triage_cases() {
        let report = advisor.assess_severity(case.narrative);
        assert_eq!(
            report.level, case.expected,
            "Case {}: severity mismatch (scores {:?})",
            case.id, report.scores
        );
    }
}

/// Dosage case: medicine, age, and weight in; suitability and text out.
struct DosageCase {
    id: &'static str,
    medicine: &'static str,
    age: u32,
    weight: f64,
    suitable: bool,
    contains: &'static str,
}

fn dosage_cases() -> Vec<DosageCase> {
    vec![
        DosageCase {
            id: "child-paracetamol-weight-based",
            medicine: "paracetamol",
            age: 8,
            weight: 20.0,
            suitable: true,
            contains: "200mg",
        },
        DosageCase {
            id: "infant",
            medicine: "paracetamol",
            age: 1,
            weight: 10.0,
            suitable: false,
            contains: "pediatrician",
        },
        DosageCase {
            id: "child-cetirizine-fixed",
            medicine: "cetirizine",
            age: 5,
            weight: 18.0,
            suitable: true,
            contains: "5mg once daily",
        },
        DosageCase {
            id: "child-generic",
            medicine: "azithromycin",
            age: 10,
            weight: 30.0,
            suitable: true,
            contains: "Consult pediatrician for appropriate child dosage",
        },
        DosageCase {
            id: "teenager-standard",
            medicine: "diclofenac",
            age: 15,
            weight: 55.0,
            suitable: true,
            contains: "50mg 2-3 times daily",
        },
        DosageCase {
            id: "elderly-boundary",
            medicine: "paracetamol",
            age: 65,
            weight: 70.0,
            suitable: true,
            contains: "(May need adjustment for elderly)",
        },
        DosageCase {
            id: "elderly-aciloc",
            medicine: "aciloc",
            age: 70,
            weight: 65.0,
            suitable: true,
            contains: "(May need adjustment for elderly)",
        },
    ]
}

#[test]
fn test_dosage_golden_cases() {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    for case in dosage_cases() {
        let advice = advisor
            .calculate_dosage(case.medicine, case.age, case.weight)
            .unwrap_or_else(|e| panic!("Case {}: unexpected error {}", case.id, e));
        assert_eq!(
            advice.suitable, case.suitable,
            "Case {}: suitability mismatch",
            case.id
        );
        assert!(
            advice.recommendation.contains(case.contains),
            "Case {}: expected recommendation containing {:?}, got {:?}",
            case.id,
            case.contains,
            advice.recommendation
        );
    }
}

#[test]
fn test_interaction_golden_pairs() {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    let pairs: Vec<(&str, &str, Option<InteractionSeverity>)> = vec![
        ("paracetamol", "diclofenac", Some(InteractionSeverity::Moderate)),
        ("azithromycin", "aciloc", Some(InteractionSeverity::Mild)),
        ("aciloc", "diclofenac", Some(InteractionSeverity::Low)),
        ("cetirizine", "paracetamol", Some(InteractionSeverity::Low)),
        ("paracetamol", "azithromycin", None),
        ("cetirizine", "diclofenac", None),
    ];

    for (a, b, expected) in pairs {
        let findings = advisor.check_interactions(&[a.to_string(), b.to_string()]);
        match expected {
            Some(severity) => {
                assert_eq!(findings.len(), 1, "pair ({}, {}): expected one finding", a, b);
                assert_eq!(
                    findings[0].severity, severity,
                    "pair ({}, {}): severity mismatch",
                    a, b
                );
                assert_eq!(findings[0].medicines, [a.to_string(), b.to_string()]);
            }
            None => assert!(
                findings.is_empty(),
                "pair ({}, {}): expected no findings",
                a,
                b
            ),
        }
    }
}

#[test]
fn test_allergy_golden_cases() {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    let cases: Vec<(&str, &str, usize)> = vec![
        ("diclofenac", "aspirin sensitivity", 1),
        ("azithromycin", "erythromycin allergy", 1),
        ("aciloc", "h2 blockers", 1),
        ("cetirizine", "hydroxyzine allergy", 1),
        ("paracetamol", "latex", 0),
    ];

    for (medicine, allergy, expected) in cases {
        let conflicts =
            advisor.check_allergies(&[medicine.to_string()], &[allergy.to_string()]);
        assert_eq!(
            conflicts.len(),
            expected,
            "({}, {}): conflict count mismatch",
            medicine,
            allergy
        );
    }
}

#[test]
fn test_consultation_record_from_advisory_pass() -> Result<()> {
    let kb = KnowledgeBase::new();
    let advisor = Advisor::new(&kb);

    let symptoms = "fever, cough";
    let medicines: Vec<String> = advisor.recommend(&symptom_set(symptoms)).into_iter().collect();
    assert_eq!(medicines.len(), 2);

    let consultation = Consultation::new(symptoms.to_string(), medicines);
    let json = consultation.to_json()?;
    assert!(json.contains("paracetamol"));
    assert!(json.contains("azithromycin"));
    assert!(json.contains("fever, cough"));

    Ok(())
}
