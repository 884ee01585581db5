use crate::RiskLevel;

#[test]
fn test_consultation_phrase_is_high_risk() {
    let text = "Conclusion: The image shows visual signs that may warrant a consultation \
                with a healthcare professional.";

    assert_eq!(RiskLevel::from_prediction(text), RiskLevel::High);
}

#[test]
fn test_keyword_matching_is_case_insensitive() {
    assert_eq!(
        RiskLevel::from_prediction("SEVERE discoloration visible"),
        RiskLevel::High
    );
    assert_eq!(
        RiskLevel::from_prediction("Moderate dryness around the heel"),
        RiskLevel::Moderate
    );
}

#[test]
fn test_clear_result_is_low_risk() {
    let text = "Conclusion: The image does not show clear visual signs of a diabetic foot ulcer.";

    assert_eq!(RiskLevel::from_prediction(text), RiskLevel::Low);
}
